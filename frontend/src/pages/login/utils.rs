use crate::api::LoginRequest;
use leptos::*;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required.".into());
    }
    if password.is_empty() {
        return Err("Password is required.".into());
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }

    pub fn reset(&self) {
        self.email.set(String::new());
        self.password.set(String::new());
    }
}
