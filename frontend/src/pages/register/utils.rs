use crate::api::RegisterRequest;
use leptos::*;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required.".into());
    }
    if email.trim().is_empty() {
        return Err("Email is required.".into());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

pub fn welcome_message(name: &str) -> String {
    format!("Welcome {}! Registration successful.", name)
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn to_request(&self) -> Result<RegisterRequest, String> {
        let name = self.name.get_untracked();
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_registration(&name, &email, &password)?;
        Ok(RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
        })
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
    }
}
