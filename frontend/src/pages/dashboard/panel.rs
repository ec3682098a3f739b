use crate::{
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::dashboard::{
        components::{OfficeSummary, RecentActivity, StatsGrid},
        view_model::use_dashboard_view_model,
    },
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Title text="Dashboard"/>
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-fg">"Welcome to your Asset Management Dashboard"</h1>
            {move || match vm.data.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error/> }.into_view(),
                Some(Ok(data)) => view! {
                    <StatsGrid stats=data.stats/>
                    <OfficeSummary offices=data.offices/>
                    <RecentActivity activities=data.activities/>
                }
                .into_view(),
            }}
        </div>
    }
}
