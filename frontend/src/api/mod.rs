mod activities;
mod assets;
mod auth;
pub mod client;
mod offices;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
