use crate::pages::dashboard::{
    repository::DashboardStats,
    utils::{stat_cards, StatCard},
};
use leptos::*;

#[component]
pub fn StatsGrid(stats: DashboardStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 xl:grid-cols-4">
            {stat_cards(&stats)
                .into_iter()
                .map(|card| view! { <StatTile card=card/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn StatTile(card: StatCard) -> impl IntoView {
    let icon_class = format!("fas {} {} text-2xl", card.icon, card.color);
    view! {
        <div class="p-6 rounded-2xl bg-surface-elevated border border-border shadow flex items-center justify-between">
            <div>
                <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{card.label}</p>
                <p class="mt-3 text-3xl font-extrabold text-fg">{card.value}</p>
            </div>
            <i class=icon_class aria-hidden="true"></i>
        </div>
    }
}
