use leptos::*;

use crate::config::{DESKTOP_BREAKPOINT_PX, SIDEBAR_COLLAPSED_PX, SIDEBAR_EXPANDED_PX};

pub fn is_mobile_width(width: f64) -> bool {
    width < DESKTOP_BREAKPOINT_PX
}

pub fn content_margin_px(collapsed: bool) -> u32 {
    if collapsed {
        SIDEBAR_COLLAPSED_PX
    } else {
        SIDEBAR_EXPANDED_PX
    }
}

pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(DESKTOP_BREAKPOINT_PX)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DESKTOP_BREAKPOINT_PX
    }
}

/// Sidebar shell state. Owned by the dashboard layout route so it survives
/// navigation between its children.
#[derive(Debug, Clone, Copy)]
pub struct LayoutState {
    pub collapsed: RwSignal<bool>,
    pub mobile_open: RwSignal<bool>,
    pub is_mobile: RwSignal<bool>,
}

impl LayoutState {
    pub fn new(width: f64) -> Self {
        Self {
            collapsed: create_rw_signal(false),
            mobile_open: create_rw_signal(false),
            is_mobile: create_rw_signal(is_mobile_width(width)),
        }
    }

    pub fn toggle_collapsed(&self) {
        self.collapsed.update(|value| *value = !*value);
    }

    pub fn toggle_mobile(&self) {
        self.mobile_open.update(|value| *value = !*value);
    }

    pub fn close_mobile(&self) {
        self.mobile_open.set(false);
    }

    /// Mobile vs desktop is fixed at mount; a resize only closes the drawer
    /// once the viewport reaches desktop width.
    pub fn handle_resize(&self, width: f64) {
        if !is_mobile_width(width) && self.mobile_open.get_untracked() {
            self.mobile_open.set(false);
        }
    }

    pub fn content_margin(&self) -> Signal<u32> {
        let collapsed = self.collapsed;
        let is_mobile = self.is_mobile;
        Signal::derive(move || {
            if is_mobile.get() {
                0
            } else {
                content_margin_px(collapsed.get())
            }
        })
    }
}

pub fn provide_layout_state() -> LayoutState {
    let state = LayoutState::new(viewport_width());
    provide_context(state);
    state
}

pub fn use_layout_state() -> LayoutState {
    use_context::<LayoutState>().unwrap_or_else(|| LayoutState::new(viewport_width()))
}
