pub mod components;
pub mod panel;
pub mod repository;

pub use panel::GlobalSearchPage;
