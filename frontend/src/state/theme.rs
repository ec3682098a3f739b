use leptos::*;
use std::rc::Rc;

use crate::{
    config::THEME_STORAGE_KEY,
    utils::storage::{default_store, KeyValueStore},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
    store: Rc<dyn KeyValueStore>,
}

impl ThemeState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let initial = store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self {
            theme: create_rw_signal(initial),
            store,
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {}", err);
        }
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(|| ThemeState::new(default_store()))
}

pub fn provide_theme(store: Rc<dyn KeyValueStore>) -> ThemeState {
    let state = ThemeState::new(store);
    provide_context(state.clone());
    state
}
