use super::utils::{welcome_message, RegisterFormState};
use crate::api::{ApiError, RegisterRequest, Session};
use crate::state::{
    auth,
    toast::{use_toasts, ToastContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<String>>,
    pub register_action: Action<RegisterRequest, Result<Session, ApiError>>,
    toasts: ToastContext,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.register_action.dispatch(request);
            }
            Err(message) => {
                self.toasts.error(message.clone());
                self.error.set(Some(message));
            }
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let form = RegisterFormState::default();
    let error = create_rw_signal(None::<String>);
    let register_action = auth::use_register_action();
    let toasts = use_toasts();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    form.reset();
                    toasts.success(welcome_message(&session.name));
                }
                Err(err) => {
                    toasts.error(err.error.clone());
                    error.set(Some(err.error));
                }
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        register_action,
        toasts,
    }
}
