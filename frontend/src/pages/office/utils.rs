use crate::api::{Asset, AssetPayload, AssetStatus, Office};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraftErrors {
    pub name: Option<String>,
    pub serial: Option<String>,
    pub inventory: Option<String>,
}

impl AssetDraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.serial.is_none() && self.inventory.is_none()
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

/// Plain values of the asset form, independent of any signals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetDraft {
    pub name: String,
    pub serial: String,
    pub inventory: String,
    pub status: AssetStatus,
}

impl AssetDraft {
    pub fn from_asset(asset: Option<&Asset>) -> Self {
        asset
            .map(|a| Self {
                name: a.name.clone(),
                serial: a.serial.clone(),
                inventory: a.inventory.clone(),
                status: a.status,
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), AssetDraftErrors> {
        let errors = AssetDraftErrors {
            name: required(&self.name, "Asset name is required"),
            serial: required(&self.serial, "Serial number is required"),
            inventory: required(&self.inventory, "Inventory number is required"),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `editing_id` is only set when updating an existing asset.
    pub fn to_payload(&self, editing_id: Option<&str>, office_id: &str) -> AssetPayload {
        AssetPayload {
            id: editing_id.map(str::to_string),
            name: self.name.trim().to_string(),
            serial: self.serial.trim().to_string(),
            inventory: self.inventory.trim().to_string(),
            status: self.status,
            office_id: office_id.to_string(),
        }
    }
}

/// Signal-backed form used by the asset modal.
#[derive(Clone, Copy)]
pub struct AssetForm {
    pub name: RwSignal<String>,
    pub serial: RwSignal<String>,
    pub inventory: RwSignal<String>,
    pub status: RwSignal<AssetStatus>,
    pub errors: RwSignal<AssetDraftErrors>,
}

impl AssetForm {
    pub fn new(asset: Option<&Asset>) -> Self {
        let draft = AssetDraft::from_asset(asset);
        Self {
            name: create_rw_signal(draft.name),
            serial: create_rw_signal(draft.serial),
            inventory: create_rw_signal(draft.inventory),
            status: create_rw_signal(draft.status),
            errors: create_rw_signal(AssetDraftErrors::default()),
        }
    }

    pub fn draft(&self) -> AssetDraft {
        AssetDraft {
            name: self.name.get_untracked(),
            serial: self.serial.get_untracked(),
            inventory: self.inventory.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    /// Validates and records field errors. Returns the draft when it is valid.
    pub fn validate(&self) -> Option<AssetDraft> {
        let draft = self.draft();
        match draft.validate() {
            Ok(()) => {
                self.errors.set(AssetDraftErrors::default());
                Some(draft)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }
}

/// Offices an asset can be moved to: everything except where it is now.
pub fn move_targets(offices: &[Office], current_office_id: &str) -> Vec<Office> {
    offices
        .iter()
        .filter(|office| office.id != current_office_id)
        .cloned()
        .collect()
}

pub fn office_heading(name: Option<&str>) -> String {
    format!("{} Assets", name.unwrap_or("Loading..."))
}
