use crate::api::Credentials;
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, CredentialErrors> {
    let errors = CredentialErrors {
        username: username
            .trim()
            .is_empty()
            .then(|| "Username is required".to_string()),
        password: password
            .is_empty()
            .then(|| "Password is required".to_string()),
    };
    if errors.is_empty() {
        Ok(Credentials {
            username: username.trim().to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

/// Username/password form shared by the login and register screens.
#[derive(Clone, Copy)]
pub struct CredentialsForm {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub errors: RwSignal<CredentialErrors>,
}

impl Default for CredentialsForm {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            errors: create_rw_signal(CredentialErrors::default()),
        }
    }
}

impl CredentialsForm {
    /// Validates the current values, recording per-field errors on failure.
    pub fn validate(&self) -> Option<Credentials> {
        let result = validate_credentials(
            &self.username.get_untracked(),
            &self.password.get_untracked(),
        );
        match result {
            Ok(credentials) => {
                self.errors.set(CredentialErrors::default());
                Some(credentials)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }

    pub fn username_error(&self) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.username.clone()))
    }

    pub fn password_error(&self) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.password.clone()))
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_validate_records_and_clears_errors() {
        with_runtime(|| {
            let form = CredentialsForm::default();
            assert!(form.validate().is_none());
            assert!(form.username_error().get().is_some());

            form.username.set("admin".into());
            form.password.set("secret".into());
            let credentials = form.validate().unwrap();
            assert_eq!(credentials.username, "admin");
            assert!(form.errors.get().is_empty());
        });
    }
}
