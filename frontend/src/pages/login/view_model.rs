use super::utils::CredentialsForm;
use crate::api::{ApiError, Credentials};
use crate::router::DASHBOARD_PATH;
use crate::state::auth;
use crate::utils::notify;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: CredentialsForm,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<Credentials, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        if let Some(credentials) = self.form.validate() {
            self.error.set(None);
            self.login_action.dispatch(credentials);
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = CredentialsForm::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.password.set(String::new());
                    let navigate = use_navigate();
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("Login failed: {}", err);
                    error.set(Some(ApiError {
                        error: INVALID_CREDENTIALS.to_string(),
                        ..err
                    }));
                    notify::alert(INVALID_CREDENTIALS);
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
