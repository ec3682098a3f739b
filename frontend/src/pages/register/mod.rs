use leptos::*;
use leptos_meta::Title;

pub mod view_model;

mod panel;

pub use panel::RegisterPanel;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text="Register"/>
        <RegisterPanel />
    }
}
