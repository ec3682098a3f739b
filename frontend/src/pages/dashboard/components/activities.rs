use crate::{
    api::Activity,
    components::empty_state::EmptyState,
    pages::dashboard::utils::{activity_display, ActivityDisplay},
    utils::time,
};
use leptos::*;

#[component]
pub fn RecentActivity(activities: Vec<Activity>) -> impl IntoView {
    let now = time::now();
    let rows: Vec<ActivityDisplay> = activities
        .iter()
        .map(|activity| activity_display(activity, now))
        .collect();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Recent Activity"</h2>
            {if rows.is_empty() {
                view! { <EmptyState title="No recent activity" icon="fa-history"/> }.into_view()
            } else {
                view! {
                    <ul class="divide-y divide-border">
                        {rows
                            .into_iter()
                            .map(|row| view! { <ActivityRow row=row/> })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </section>
    }
}

#[component]
fn ActivityRow(row: ActivityDisplay) -> impl IntoView {
    let icon_class = format!("fas {} {} mt-1", row.icon, row.color);
    view! {
        <li class="py-3 flex items-start gap-3 text-sm" data-activity-id=row.id>
            <i class=icon_class aria-hidden="true"></i>
            <div class="flex-1">
                <p class="text-fg">{row.text}</p>
                <p class="text-xs text-fg-muted">{row.time}</p>
            </div>
        </li>
    }
}
