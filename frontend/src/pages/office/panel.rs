use crate::{
    api::Office,
    components::{
        common::Button,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
        search_input::SearchInput,
    },
    pages::office::{
        components::{AssetFormModal, AssetTable, DeleteAssetModal, MoveAssetModal},
        utils::office_heading,
        view_model::{use_office_view_model, OfficeModal, OfficeViewModel},
    },
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn OfficePanel(#[prop(into)] office_id: Signal<String>) -> impl IntoView {
    let vm = use_office_view_model(office_id);
    let assets = vm.assets;
    let office_name = vm.office_name();

    let heading = Signal::derive(move || office_heading(office_name.get().as_deref()));

    view! {
        <Title text=move || heading.get()/>
        <div class="space-y-6">
            <h1 class="text-3xl font-extrabold text-fg">{heading}</h1>
            <div class="flex flex-col sm:flex-row justify-between items-center gap-4">
                <div class="w-full sm:flex-1">
                    <SearchInput
                        value=assets.term()
                        on_input=Callback::new(move |term| assets.on_input(term))
                        placeholder="Search assets..."
                        on_clear=Callback::new(move |_| assets.clear())
                    />
                </div>
                <Button on:click=move |_| vm.open(OfficeModal::AddAsset)>
                    <i class="fas fa-plus mr-2"></i>
                    "Add New Asset"
                </Button>
            </div>
            <div class="bg-surface-elevated rounded-lg p-6 shadow border border-border overflow-x-auto">
                {move || {
                    if assets.loading().get() {
                        return view! { <LoadingSpinner/> }.into_view();
                    }
                    if let Some(err) = assets.error().get() {
                        return view! { <ErrorMessage message=err.error/> }.into_view();
                    }
                    let list = assets.results().get();
                    if list.is_empty() {
                        return view! {
                            <EmptyState
                                title="No assets found for this office."
                                description="Add a new asset to get started."
                                icon="fa-box-open"
                            />
                        }
                        .into_view();
                    }
                    view! {
                        <AssetTable
                            assets=list
                            on_move=Callback::new(move |asset| vm.open(OfficeModal::MoveAsset(asset)))
                            on_edit=Callback::new(move |asset| vm.open(OfficeModal::EditAsset(asset)))
                            on_delete=Callback::new(move |asset| vm.open(OfficeModal::DeleteAsset(asset)))
                        />
                    }
                    .into_view()
                }}
            </div>
            <OfficeModals vm=vm/>
        </div>
    }
}

#[component]
fn OfficeModals(vm: OfficeViewModel) -> impl IntoView {
    let modal = vm.modal;
    let close = Callback::new(move |_| vm.close());

    view! {
        {move || match modal.get() {
            OfficeModal::AddAsset | OfficeModal::EditAsset(_) => {
                let asset = match modal.get_untracked() {
                    OfficeModal::EditAsset(asset) => Some(asset),
                    _ => None,
                };
                view! {
                    <AssetFormModal
                        asset=asset
                        office_id=vm.office_id.get_untracked()
                        pending=vm.save_action.pending()
                        on_save=Callback::new(move |payload| vm.save(payload))
                        on_close=close
                    />
                }
                .into_view()
            }
            OfficeModal::MoveAsset(asset) => {
                let current_office = Office {
                    id: vm.office_id.get_untracked(),
                    name: vm.office_name().get_untracked().unwrap_or_default(),
                };
                let asset_id = asset.id.clone();
                view! {
                    <MoveAssetModal
                        asset_name=asset.name
                        current_office=current_office
                        offices=vm.all_offices().get_untracked()
                        pending=vm.move_action.pending()
                        on_move=Callback::new(move |office_id| vm.move_to(asset_id.clone(), office_id))
                        on_close=close
                    />
                }
                .into_view()
            }
            OfficeModal::DeleteAsset(asset) => view! {
                <DeleteAssetModal
                    asset_name=asset.name
                    pending=vm.delete_action.pending()
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_close=close
                />
            }
            .into_view(),
            OfficeModal::Closed => ().into_view(),
        }}
    }
}
