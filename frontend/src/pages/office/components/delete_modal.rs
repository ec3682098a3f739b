use crate::components::common::{Button, ButtonVariant};
use leptos::{ev::KeyboardEvent, *};

pub fn delete_prompt(asset_name: &str) -> String {
    format!(
        "Are you sure you want to delete the asset \"{}\"? This action cannot be undone.",
        asset_name
    )
}

/// Mounted only while a delete is awaiting confirmation. Cancel stays enabled
/// while the request is in flight; confirm does not.
#[component]
pub fn DeleteAssetModal(
    #[prop(into)] asset_name: String,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let prompt = delete_prompt(&asset_name);

    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-6"
                role="alertdialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.call(());
                    }
                }
            >
                <div class="flex items-center gap-3">
                    <i class="fas fa-times-circle text-3xl text-red-400"></i>
                    <h2 class="text-2xl font-bold text-fg">"Confirm Deletion"</h2>
                </div>
                <p class="text-fg-muted">{prompt}</p>
                <div class="flex justify-end gap-3">
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        loading=pending
                        attr:type="button"
                        on:click=move |_| on_confirm.call(())
                    >
                        {move || if pending.get() { "Deleting..." } else { "Delete Asset" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_quotes_the_asset_name() {
        assert_eq!(
            delete_prompt("Laptop"),
            "Are you sure you want to delete the asset \"Laptop\"? This action cannot be undone."
        );
    }
}
