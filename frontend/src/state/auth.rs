use crate::{
    api::{ApiClient, ApiError, Credentials},
    pages::login::repository::AuthRepository,
    state::session::{use_session_store, SessionStore},
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn from_session(session: &SessionStore) -> Self {
        Self {
            token: session.token(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn create_auth_context() -> AuthContext {
    let session = use_session_store();
    create_signal(AuthState::from_session(&session))
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

fn repository() -> AuthRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    AuthRepository::new_with_client(Rc::new(api))
}

pub async fn login_request(
    credentials: Credentials,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = repo.login(&credentials).await?;
    repo.session().save(&response.access_token)?;
    set_auth_state.set(AuthState::from_session(repo.session()));
    log::info!("Signed in as {}", credentials.username);
    Ok(())
}

pub async fn register_request(
    credentials: Credentials,
    repo: &AuthRepository,
) -> Result<(), ApiError> {
    repo.register(&credentials).await
}

/// Local only: the API has no logout endpoint.
pub fn logout(session: &SessionStore, set_auth_state: WriteSignal<AuthState>) {
    session.clear();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");
}

pub fn use_login_action() -> Action<Credentials, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_register_action() -> Action<Credentials, Result<(), ApiError>> {
    let repo = repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let session = use_session_store();
    Callback::new(move |_| logout(&session, set_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            assert!(!state.get().is_authenticated());
        });
    }

    #[test]
    fn provider_state_reads_the_session_store() {
        with_runtime(|| {
            let session = SessionStore::in_memory();
            session.save("abc.def").unwrap();
            provide_context(session);
            let (state, _) = create_auth_context();
            assert_eq!(state.get().token.as_deref(), Some("abc.def"));
        });
    }

    #[test]
    fn logout_clears_storage_and_state() {
        with_runtime(|| {
            let session = SessionStore::in_memory();
            session.save("abc.def").unwrap();
            let (state, set_state) = create_signal(AuthState::from_session(&session));
            logout(&session, set_state);
            assert!(session.raw_token().is_none());
            assert!(!state.get().is_authenticated());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn login_stores_token_and_updates_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(200)
                    .json_body(serde_json::json!({ "access_token": "abc.def" }));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.base_url());
        let session = api.session().clone();
        let repo = AuthRepository::new_with_client(Rc::new(api));

        login_request(credentials(), &repo, set_state).await.unwrap();

        assert_eq!(session.token().as_deref(), Some("abc.def"));
        assert!(state.get().is_authenticated());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_session_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(401)
                    .json_body(serde_json::json!({ "message": "Unauthorized" }));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.base_url());
        let session = api.session().clone();
        let repo = AuthRepository::new_with_client(Rc::new(api));

        let err = login_request(credentials(), &repo, set_state)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(session.raw_token().is_none());
        assert!(!state.get().is_authenticated());
        runtime.dispose();
    }

    #[tokio::test]
    async fn register_succeeds_without_touching_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/register");
                then.status(201).json_body(serde_json::json!({ "id": "u2" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url());
        let session = api.session().clone();
        let repo = AuthRepository::new_with_client(Rc::new(api));
        register_request(credentials(), &repo).await.unwrap();
        assert!(session.raw_token().is_none());
    }
}
