use crate::{
    api::{ApiClient, ApiError, Asset, AssetPayload, Office},
    pages::office::repository::OfficeRepository,
    state::search::{use_search_controller, SearchController, SearchPolicy},
    utils::notify,
};
use leptos::*;
use std::rc::Rc;

/// At most one dialog is open on the office page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OfficeModal {
    #[default]
    Closed,
    AddAsset,
    EditAsset(Asset),
    MoveAsset(Asset),
    DeleteAsset(Asset),
}

impl OfficeModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, OfficeModal::Closed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub asset_id: String,
    pub office_id: String,
}

#[derive(Clone, Copy)]
pub struct OfficeViewModel {
    pub office_id: Signal<String>,
    pub office: Resource<String, Result<Office, ApiError>>,
    pub offices: Resource<(), Result<Vec<Office>, ApiError>>,
    pub assets: SearchController<Asset>,
    pub modal: RwSignal<OfficeModal>,
    pub save_action: Action<AssetPayload, Result<(), ApiError>>,
    pub move_action: Action<MoveRequest, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl OfficeViewModel {
    pub fn open(&self, modal: OfficeModal) {
        self.modal.set(modal);
    }

    pub fn close(&self) {
        self.modal.set(OfficeModal::Closed);
    }

    pub fn save(&self, payload: AssetPayload) {
        if !self.save_action.pending().get_untracked() {
            self.save_action.dispatch(payload);
        }
    }

    pub fn move_to(&self, asset_id: String, office_id: String) {
        if office_id.trim().is_empty() || self.move_action.pending().get_untracked() {
            return;
        }
        self.move_action.dispatch(MoveRequest {
            asset_id,
            office_id,
        });
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let OfficeModal::DeleteAsset(asset) = self.modal.get_untracked() {
            self.delete_action.dispatch(asset.id);
        }
    }

    pub fn office_name(&self) -> Signal<Option<String>> {
        let office = self.office;
        Signal::derive(move || office.get().and_then(|res| res.ok()).map(|o| o.name))
    }

    pub fn all_offices(&self) -> Signal<Vec<Office>> {
        let offices = self.offices;
        Signal::derive(move || offices.get().and_then(|res| res.ok()).unwrap_or_default())
    }
}

/// Closes the modal and reloads the list on success. On failure the modal
/// stays open and the user gets a blocking alert.
fn settle_mutation(
    result: Result<(), ApiError>,
    context: &str,
    modal: RwSignal<OfficeModal>,
    assets: SearchController<Asset>,
) {
    match result {
        Ok(()) => {
            modal.set(OfficeModal::Closed);
            assets.reload();
        }
        Err(err) => {
            log::error!("{} failed: {}", context, err);
            notify::alert(&format!("Error: {}", err.error));
        }
    }
}

pub fn use_office_view_model(office_id: Signal<String>) -> OfficeViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = OfficeRepository::new_with_client(Rc::new(api));

    let office = {
        let repo = repository.clone();
        create_resource(
            move || office_id.get(),
            move |id| {
                let repo = repo.clone();
                async move {
                    let result = repo.load_office(&id).await;
                    if let Err(err) = &result {
                        log::error!("Failed to load office {}: {}", id, err);
                    }
                    result
                }
            },
        )
    };

    let offices = {
        let repo = repository.clone();
        create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move { repo.load_offices().await }
            },
        )
    };

    let assets = {
        let repo = repository.clone();
        use_search_controller(SearchPolicy::office(), move |term: String| {
            let repo = repo.clone();
            let id = office_id.get_untracked();
            async move { repo.load_assets(&id, &term).await }
        })
    };

    let save_action = {
        let repo = repository.clone();
        create_action(move |payload: &AssetPayload| {
            let repo = repo.clone();
            let payload = payload.clone();
            async move { repo.save_asset(payload).await }
        })
    };

    let move_action = {
        let repo = repository.clone();
        create_action(move |req: &MoveRequest| {
            let repo = repo.clone();
            let req = req.clone();
            async move { repo.move_asset(&req.asset_id, &req.office_id).await }
        })
    };

    let delete_action = {
        let repo = repository;
        create_action(move |asset_id: &String| {
            let repo = repo.clone();
            let asset_id = asset_id.clone();
            async move { repo.delete_asset(&asset_id).await }
        })
    };

    let modal = create_rw_signal(OfficeModal::Closed);

    // Initial load and reload when switching offices.
    create_effect(move |_| {
        office_id.track();
        modal.set(OfficeModal::Closed);
        assets.reload();
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            settle_mutation(result, "Saving asset", modal, assets);
        }
    });
    create_effect(move |_| {
        if let Some(result) = move_action.value().get() {
            settle_mutation(result, "Moving asset", modal, assets);
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            settle_mutation(result, "Deleting asset", modal, assets);
        }
    });

    OfficeViewModel {
        office_id,
        office,
        offices,
        assets,
        modal,
        save_action,
        move_action,
        delete_action,
    }
}
