use crate::{
    components::{empty_state::EmptyState, sidebar::office_href},
    pages::dashboard::repository::OfficeWithCount,
};
use leptos::*;

#[component]
pub fn OfficeSummary(offices: Vec<OfficeWithCount>) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Office Summary"</h2>
            {if offices.is_empty() {
                view! { <EmptyState title="No offices" icon="fa-building"/> }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-3">
                        {offices
                            .into_iter()
                            .map(|office| {
                                let href = office_href(&office.id);
                                view! {
                                    <a
                                        href=href
                                        class="block p-5 rounded-lg bg-surface-elevated border border-border shadow hover:shadow-lg transition-shadow"
                                    >
                                        <h3 class="font-semibold text-fg">{office.name}</h3>
                                        <p class="mt-2 text-2xl font-bold text-fg">{office.asset_count}</p>
                                        <p class="text-sm text-fg-muted">"Assets assigned"</p>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </section>
    }
}
