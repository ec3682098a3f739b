pub mod auth;
pub mod layout;
pub mod search;
pub mod session;
pub mod theme;
