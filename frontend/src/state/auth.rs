use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest, Session},
    pages::{login::repository::LoginRepository, register::repository::RegisterRepository},
    state::session::{Redirect, SessionManager, SESSION_STORAGE_KEY},
    utils::storage::{KeyValueStore, MemoryStorage},
};
use chrono::Utc;
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.name.as_str())
    }
}

/// Reactive handle over the [`SessionManager`]. Every transition publishes the
/// resulting session snapshot and queues the redirect it asked for; the
/// [`SessionProvider`] performs the navigation.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
    manager: StoredValue<SessionManager>,
    redirect: RwSignal<Option<Redirect>>,
}

impl SessionContext {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let manager = SessionManager::new(storage);
        let state = create_rw_signal(AuthState {
            session: manager.current().cloned(),
        });
        Self {
            state,
            manager: store_value(manager),
            redirect: create_rw_signal(None),
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn redirect(&self) -> ReadSignal<Option<Redirect>> {
        self.redirect.read_only()
    }

    pub fn revalidate(&self, path: &str) {
        let redirect = self
            .manager
            .try_update_value(|manager| manager.validate(path, Utc::now()))
            .flatten();
        self.publish(redirect);
    }

    pub fn login(&self, session: Session) {
        let redirect = self
            .manager
            .try_update_value(|manager| manager.login(session));
        self.publish(redirect);
    }

    pub fn logout(&self) {
        let redirect = self.manager.try_update_value(|manager| manager.logout());
        self.publish(redirect);
    }

    fn publish(&self, redirect: Option<Redirect>) {
        let session = self
            .manager
            .try_with_value(|manager| manager.current().cloned())
            .flatten();
        if self.state.with_untracked(|state| state.session != session) {
            self.state.set(AuthState { session });
        }
        if let Some(target) = redirect {
            self.redirect.set(Some(target));
        }
    }
}

pub fn provide_session(storage: Rc<dyn KeyValueStore>) -> SessionContext {
    let ctx = SessionContext::new(storage);
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(Rc::new(MemoryStorage::default())))
}

/// Drives revalidation from the router location, a periodic timer and
/// cross-tab storage notifications, and applies queued redirects. Must sit
/// inside the `<Router>`.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    watch_session(session, pathname.into());

    create_effect(move |_| {
        if let Some(target) = session.redirect().get() {
            if pathname.get_untracked() != target.path() {
                let navigate = use_navigate();
                navigate(
                    target.path(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    view! { <>{children()}</> }
}

/// Whether a `storage` event with this key may have touched the session
/// record. A missing key means the whole store was cleared.
pub(crate) fn is_session_change(key: Option<&str>) -> bool {
    key.map_or(true, |key| key == SESSION_STORAGE_KEY)
}

/// Revalidates whenever `path` changes and, in the browser, on a timer and on
/// storage events from other tabs. The browser hooks are released when the
/// owning scope is cleaned up.
pub(crate) fn watch_session(session: SessionContext, path: Signal<String>) {
    create_effect(move |_| {
        let current = path.get();
        session.revalidate(&current);
    });

    #[cfg(target_arch = "wasm32")]
    {
        use crate::state::session::REVALIDATE_INTERVAL;

        let interval = gloo_timers::callback::Interval::new(
            REVALIDATE_INTERVAL.as_millis() as u32,
            move || session.revalidate(&path.get_untracked()),
        );

        let listener = window_event_listener(ev::storage, move |event| {
            if is_session_change(event.key().as_deref()) {
                log::debug!("session record changed in another tab");
                session.revalidate(&path.get_untracked());
            }
        });

        on_cleanup(move || {
            drop(interval);
            listener.remove();
        });
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    session: SessionContext,
) -> Result<Session, ApiError> {
    let response = repo.login(&request).await?;
    session.login(response.clone());
    Ok(response)
}

pub async fn register_request(
    request: RegisterRequest,
    repo: &RegisterRepository,
    session: SessionContext,
) -> Result<Session, ApiError> {
    let response = repo.register(&request).await?;
    session.login(response.clone());
    Ok(response)
}

fn api_client() -> Rc<ApiClient> {
    Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let session = use_session();
    let repo = LoginRepository::new_with_client(api_client());

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, session).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<Session, ApiError>> {
    let session = use_session();
    let repo = RegisterRepository::new_with_client(api_client());

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo, session).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::fixtures::valid_session;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn login_request_stores_session_and_redirects() {
        let server = MockServer::start_async().await;
        let user = valid_session();
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/users/login")
                    .json_body(serde_json::json!({ "email": "ana@example.com", "password": "secret" }));
                then.status(200).json_body(serde_json::json!({
                    "_id": user.id,
                    "name": user.name,
                    "email": user.email,
                    "token": user.token,
                }));
            })
            .await;

        let runtime = create_runtime();
        let storage = MemoryStorage::default();
        let session = SessionContext::new(Rc::new(storage.clone()));
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let returned = login_request(
            LoginRequest {
                email: "ana@example.com".into(),
                password: "secret".into(),
            },
            &repo,
            session,
        )
        .await
        .unwrap();

        assert_eq!(returned, user);
        assert_eq!(session.state().get_untracked().session, Some(user));
        assert_eq!(session.redirect().get_untracked(), Some(Redirect::Dashboard));
        assert!(storage.get(SESSION_STORAGE_KEY).is_some());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_register_leaves_session_untouched() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users/register");
                then.status(400)
                    .json_body(serde_json::json!({ "message": "User already exists" }));
            })
            .await;

        let runtime = create_runtime();
        let storage = MemoryStorage::default();
        let session = SessionContext::new(Rc::new(storage.clone()));
        let repo = RegisterRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let err = register_request(
            RegisterRequest {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                password: "secret".into(),
            },
            &repo,
            session,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "User already exists");
        assert!(!session.state().get_untracked().is_authenticated());
        assert!(session.redirect().get_untracked().is_none());
        assert!(storage.get(SESSION_STORAGE_KEY).is_none());
        runtime.dispose();
    }
}
