use crate::{
    api::Office,
    components::common::{Button, ButtonVariant},
    pages::office::utils::move_targets,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn MoveAssetModal(
    #[prop(into)] asset_name: String,
    current_office: Office,
    offices: Vec<Office>,
    #[prop(into)] pending: Signal<bool>,
    on_move: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected = create_rw_signal(String::new());
    let targets = move_targets(&offices, &current_office.id);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let office_id = selected.get_untracked();
        if office_id.is_empty() {
            return;
        }
        on_move.call(office_id);
    };

    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6" role="dialog" aria-modal="true">
                <h2 class="text-2xl font-bold text-fg mb-6">"Move Asset"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <p class="text-fg-muted">
                        "Move "<strong>{format!("\"{}\"", asset_name)}</strong>
                        " from "<strong>{current_office.name}</strong>" to:"
                    </p>
                    <select
                        class="w-full px-3 py-2 rounded-md bg-surface-muted border border-border text-fg"
                        aria-label="Destination office"
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Select new office..."</option>
                        {targets
                            .into_iter()
                            .map(|office| view! { <option value=office.id>{office.name}</option> })
                            .collect_view()}
                    </select>
                    <div class="flex justify-end gap-3 pt-2">
                        <Button
                            variant=ButtonVariant::Secondary
                            attr:type="button"
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            loading=pending
                            disabled=Signal::derive(move || selected.get().is_empty())
                            attr:type="submit"
                        >
                            "Move Asset"
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
