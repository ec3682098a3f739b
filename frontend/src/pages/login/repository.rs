use crate::{
    api::{ApiClient, ApiError, Credentials, LoginResponse},
    state::session::SessionStore,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl AuthRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.client.login(credentials).await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.client.register(credentials).await
    }
}
