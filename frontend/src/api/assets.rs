use crate::api::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Asset, AssetPayload, MoveAssetRequest},
};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ApiClient {
    /// `GET /api/assets`, optionally filtered with `?search=`.
    pub async fn list_assets(&self, search: Option<&str>) -> Result<Vec<Asset>, ApiError> {
        let url = self.url("/api/assets").await;
        let mut request = self.http_client().get(url);
        if let Some(term) = non_blank(search) {
            request = request.query(&[("search", term)]);
        }
        let response = self.send(request).await?;
        Self::parse_json(response).await
    }

    /// Assets of one office. A blank query lists all of them, anything else
    /// goes through the office search endpoint.
    pub async fn list_office_assets(
        &self,
        office_id: &str,
        query: Option<&str>,
    ) -> Result<Vec<Asset>, ApiError> {
        let base = format!("/api/assets/office/{}", encode_segment(office_id));
        let request = match non_blank(query) {
            Some(q) => self
                .http_client()
                .get(self.url(&format!("{}/search", base)).await)
                .query(&[("q", q)]),
            None => self.http_client().get(self.url(&base).await),
        };
        let response = self.send(request).await?;
        Self::parse_json(response).await
    }

    pub async fn create_asset(&self, payload: &AssetPayload) -> Result<(), ApiError> {
        let url = self.url("/api/assets").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        Self::expect_success(response).await.map(|_| ())
    }

    pub async fn update_asset(&self, asset_id: &str, payload: &AssetPayload) -> Result<(), ApiError> {
        let url = self
            .url(&format!("/api/assets/{}", encode_segment(asset_id)))
            .await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        Self::expect_success(response).await.map(|_| ())
    }

    /// Moving is a partial update carrying only `officeId`.
    pub async fn move_asset(&self, asset_id: &str, office_id: &str) -> Result<(), ApiError> {
        let url = self
            .url(&format!("/api/assets/{}", encode_segment(asset_id)))
            .await;
        let body = MoveAssetRequest {
            office_id: office_id.to_string(),
        };
        let response = self.send(self.http_client().put(url).json(&body)).await?;
        Self::expect_success(response).await.map(|_| ())
    }

    pub async fn delete_asset(&self, asset_id: &str) -> Result<(), ApiError> {
        let url = self
            .url(&format!("/api/assets/{}", encode_segment(asset_id)))
            .await;
        let response = self.send(self.http_client().delete(url)).await?;
        Self::expect_success(response).await.map(|_| ())
    }
}
