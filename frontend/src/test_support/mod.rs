#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Asset, AssetStatus, Office};
    use crate::state::auth::{AuthContext, AuthState};
    use crate::state::session::SessionStore;
    use leptos::*;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub fn sample_office(id: &str, name: &str) -> Office {
        Office {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn sample_asset(id: &str, name: &str, office_id: &str) -> Asset {
        Asset {
            id: id.into(),
            name: name.into(),
            serial: format!("SN-{}", id),
            inventory: format!("INV-{}", id),
            status: AssetStatus::Active,
            office_id: Some(office_id.into()),
            office: None,
            created_at: None,
        }
    }

    /// Provides an in-memory session (optionally holding `token`) and the
    /// matching auth signal.
    pub fn provide_session(token: Option<&str>) -> (SessionStore, AuthContext) {
        let session = SessionStore::in_memory();
        if let Some(token) = token {
            session.save(token).expect("in-memory save");
        }
        provide_context(session.clone());
        let ctx: AuthContext = create_signal(AuthState::from_session(&session));
        provide_context::<AuthContext>(ctx);
        (session, ctx)
    }
}
