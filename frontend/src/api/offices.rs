use crate::api::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Office},
};

impl ApiClient {
    pub async fn list_offices(&self) -> Result<Vec<Office>, ApiError> {
        let url = self.url("/api/offices").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn get_office(&self, office_id: &str) -> Result<Office, ApiError> {
        let url = self
            .url(&format!("/api/offices/{}", encode_segment(office_id)))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }
}
