use crate::{
    api::{Asset, AssetPayload, AssetStatus},
    components::common::{Button, ButtonVariant},
    pages::office::utils::AssetForm,
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md bg-surface-muted border border-border text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg-muted mb-1">{label}</label>
            <input
                id=id
                type="text"
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="text-status-error-text text-xs mt-1">{msg}</p> })}
        </div>
    }
}

/// Create/edit dialog. `asset` is `None` when adding a new asset.
#[component]
pub fn AssetFormModal(
    asset: Option<Asset>,
    #[prop(into)] office_id: String,
    #[prop(into)] pending: Signal<bool>,
    on_save: Callback<AssetPayload>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = AssetForm::new(asset.as_ref());
    let editing_id = asset.as_ref().map(|a| a.id.clone());
    let is_edit = editing_id.is_some();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(draft) = form.validate() {
            on_save.call(draft.to_payload(editing_id.as_deref(), &office_id));
        }
    };

    let errors = form.errors;
    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6" role="dialog" aria-modal="true">
                <h2 class="text-2xl font-bold text-fg mb-6">
                    {if is_edit { "Edit Asset" } else { "Add New Asset" }}
                </h2>
                <form class="space-y-4" on:submit=on_submit>
                    <FormField
                        id="asset-name"
                        label="Asset Name"
                        value=form.name
                        error=Signal::derive(move || errors.with(|e| e.name.clone()))
                    />
                    <FormField
                        id="asset-serial"
                        label="Serial Number"
                        value=form.serial
                        error=Signal::derive(move || errors.with(|e| e.serial.clone()))
                    />
                    <FormField
                        id="asset-inventory"
                        label="Inventory Number"
                        value=form.inventory
                        error=Signal::derive(move || errors.with(|e| e.inventory.clone()))
                    />
                    <div>
                        <label for="asset-status" class="block text-sm font-medium text-fg-muted mb-1">"Status"</label>
                        <select
                            id="asset-status"
                            class=INPUT_CLASS
                            on:change=move |ev| {
                                if let Some(status) = AssetStatus::from_label(&event_target_value(&ev)) {
                                    form.status.set(status);
                                }
                            }
                        >
                            {AssetStatus::ALL
                                .into_iter()
                                .map(|status| view! {
                                    <option
                                        value=status.label()
                                        selected=move || form.status.get() == status
                                    >
                                        {status.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="flex justify-end gap-3 pt-2">
                        <Button
                            variant=ButtonVariant::Secondary
                            attr:type="button"
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </Button>
                        <Button loading=pending attr:type="submit">
                            {if is_edit { "Save Changes" } else { "Add Asset" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_asset;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn add_mode_starts_blank() {
        let html = render_to_string(|| {
            view! {
                <AssetFormModal
                    asset=None
                    office_id="o1"
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Add New Asset"));
        assert!(html.contains("Add Asset"));
        assert!(html.contains("In Repair"));
    }

    #[test]
    fn edit_mode_uses_save_label() {
        let asset = sample_asset("a1", "Laptop", "o1");
        let html = render_to_string(move || {
            view! {
                <AssetFormModal
                    asset=Some(asset)
                    office_id="o1"
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Edit Asset"));
        assert!(html.contains("Save Changes"));
    }
}
