use crate::api::{
    client::ApiClient,
    types::{ApiError, Credentials, LoginResponse},
};

impl ApiClient {
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = self.url("/auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(credentials))
            .await?;
        Self::parse_json(response).await
    }

    /// The response body is ignored; any 2xx counts as registered.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.url("/auth/register").await;
        let response = self
            .send(self.http_client().post(url).json(credentials))
            .await?;
        Self::expect_success(response).await.map(|_| ())
    }
}
