use crate::state::theme::{provide_theme, use_theme, Theme};
use crate::utils::storage::KeyValueStore;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-gray-200 dark:bg-gray-700 transition-colors focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2"
            on:click=on_click
            aria-label="Toggle theme"
            aria-pressed=move || (current_theme.get() == Theme::Dark).to_string()
        >
            <span class="sr-only">"Toggle theme"</span>
            <span
                class=move || {
                    format!(
                        "inline-block h-4 w-4 transform rounded-full transition-transform {}",
                        if current_theme.get() == Theme::Dark {
                            "translate-x-6 bg-primary-600"
                        } else {
                            "translate-x-1 bg-white"
                        }
                    )
                }
            />
            <i class=move || {
                if current_theme.get() == Theme::Dark {
                    "fas fa-moon absolute left-1 text-xs text-gray-400"
                } else {
                    "fas fa-sun absolute right-1 text-xs text-yellow-500"
                }
            }></i>
        </button>
    }
}

#[component]
pub fn ThemeProvider(store: Rc<dyn KeyValueStore>, children: Children) -> impl IntoView {
    let theme_state = provide_theme(store);
    let current_theme = theme_state.current();

    view! {
        <div
            class=move || current_theme.get().as_class()
            data-theme=move || current_theme.get().as_str()
        >
            {children()}
        </div>
    }
}
