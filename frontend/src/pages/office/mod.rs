use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::OfficePanel;

#[component]
pub fn OfficePage() -> impl IntoView {
    let params = use_params_map();
    let office_id = Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));
    view! { <OfficePanel office_id=office_id/> }
}
