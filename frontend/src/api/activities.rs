use crate::api::{
    client::ApiClient,
    types::{Activity, ApiError},
};

impl ApiClient {
    pub async fn list_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let url = self.url("/api/activities").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }
}
