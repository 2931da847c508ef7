use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest, Session};
use crate::state::{
    auth,
    toast::{use_toasts, ToastContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
    toasts: ToastContext,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(message) => {
                self.toasts.error(message.clone());
                self.error.set(Some(message));
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();
    let toasts = use_toasts();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.reset();
                }
                Err(err) => {
                    toasts.error(err.error.clone());
                    error.set(Some(err.error));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
        toasts,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::provide_toasts;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
        });
    }

    #[test]
    fn submit_with_missing_fields_reports_inline_and_toast() {
        with_runtime(|| {
            let toasts = provide_toasts();
            let vm = use_login_view_model();
            vm.submit();
            assert_eq!(vm.error.get_untracked().as_deref(), Some("Email is required."));
            assert_eq!(toasts.queue().get_untracked().toasts().len(), 1);
            assert_eq!(vm.login_action.version().get_untracked(), 0);
        });
    }
}
