use crate::state::{
    auth::{use_session, AuthState},
    session::LOGIN_PATH,
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_session().state();
    let is_authenticated = create_memo(move |_| should_render_children(&auth.get()));
    view! {
        <Show when=move || is_authenticated.get() fallback=|| view! { <LoginRedirect/> }>
            {children()}
        </Show>
    }
}

/// Replaces the current history entry with the login page.
#[component]
pub fn LoginRedirect() -> impl IntoView {
    create_effect(move |_| {
        let navigate = use_navigate();
        navigate(
            LOGIN_PATH,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}

fn should_render_children(state: &AuthState) -> bool {
    state.is_authenticated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::fixtures::valid_session;

    #[test]
    fn guard_renders_only_with_session() {
        assert!(!should_render_children(&AuthState::default()));
        assert!(should_render_children(&AuthState {
            session: Some(valid_session()),
        }));
    }
}
