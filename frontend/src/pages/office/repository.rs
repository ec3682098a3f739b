use crate::api::{ApiClient, ApiError, Asset, AssetPayload, Office};
use std::rc::Rc;

#[derive(Clone)]
pub struct OfficeRepository {
    client: Rc<ApiClient>,
}

impl OfficeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_office(&self, office_id: &str) -> Result<Office, ApiError> {
        self.client.get_office(office_id).await
    }

    pub async fn load_offices(&self) -> Result<Vec<Office>, ApiError> {
        self.client.list_offices().await
    }

    pub async fn load_assets(&self, office_id: &str, query: &str) -> Result<Vec<Asset>, ApiError> {
        self.client.list_office_assets(office_id, Some(query)).await
    }

    /// POST when the payload has no id, PUT otherwise.
    pub async fn save_asset(&self, payload: AssetPayload) -> Result<(), ApiError> {
        match payload.id.clone() {
            Some(id) => self.client.update_asset(&id, &payload).await,
            None => self.client.create_asset(&payload).await,
        }
    }

    pub async fn move_asset(&self, asset_id: &str, office_id: &str) -> Result<(), ApiError> {
        self.client.move_asset(asset_id, office_id).await
    }

    pub async fn delete_asset(&self, asset_id: &str) -> Result<(), ApiError> {
        self.client.delete_asset(asset_id).await
    }
}
