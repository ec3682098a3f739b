use crate::api::{ApiError, Credentials};
use crate::pages::login::utils::CredentialsForm;
use crate::router::LOGIN_PATH;
use crate::state::auth;
use crate::utils::notify;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

pub const REGISTERED_NOTICE: &str = "Registration successful. Please sign in.";

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: CredentialsForm,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub register_action: Action<Credentials, Result<(), ApiError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        if let Some(credentials) = self.form.validate() {
            self.error.set(None);
            self.success.set(None);
            self.register_action.dispatch(credentials);
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let form = CredentialsForm::default();
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let register_action = auth::use_register_action();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    success.set(Some(REGISTERED_NOTICE.to_string()));
                    notify::alert(REGISTERED_NOTICE);
                    let navigate = use_navigate();
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("Registration failed: {}", err);
                    notify::alert(&format!("Registration failed: {}", err));
                    error.set(Some(err));
                }
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        success,
        register_action,
    }
}
