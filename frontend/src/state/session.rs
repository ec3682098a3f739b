use std::rc::Rc;

use leptos::*;

use crate::{
    config::TOKEN_STORAGE_KEY,
    utils::storage::{default_store, KeyValueStore, MemoryStorage, StorageError},
};

/// A token is usable when present, non-blank and not the string `"undefined"`
/// (what a failed login used to leave behind).
pub fn is_valid_token(token: Option<&str>) -> bool {
    match token {
        Some(raw) => {
            let trimmed = raw.trim();
            !trimmed.is_empty() && trimmed != "undefined"
        }
        None => false,
    }
}

/// Storage-backed holder of the bearer token. Provided once at the app root.
#[derive(Clone)]
pub struct SessionStore {
    store: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(default_store())
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    pub fn raw_token(&self) -> Option<String> {
        self.store.get(TOKEN_STORAGE_KEY)
    }

    /// The stored token, only when it passes [`is_valid_token`].
    pub fn token(&self) -> Option<String> {
        self.raw_token()
            .filter(|token| is_valid_token(Some(token.as_str())))
    }

    pub fn has_valid_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn save(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_STORAGE_KEY, token)
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_STORAGE_KEY);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::browser()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_valid_token", &self.has_valid_token())
            .finish()
    }
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_default()
}
