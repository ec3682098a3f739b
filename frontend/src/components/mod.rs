pub mod auth_form;
pub mod common;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod search_input;
pub mod sidebar;
pub mod status_badge;
pub mod theme;
