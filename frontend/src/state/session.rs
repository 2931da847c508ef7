//! Session lifecycle: restore from durable storage, expiry checks, login and
//! logout, and the redirect each transition calls for.
//!
//! [`SessionManager`] is deliberately free of any UI framework so every
//! transition can be exercised directly; the reactive wrapper in
//! [`crate::state::auth`] feeds it the current path and applies the returned
//! [`Redirect`].

use chrono::{DateTime, Utc};
use std::{rc::Rc, time::Duration};

use crate::{api::Session, utils::storage::KeyValueStore};

pub const SESSION_STORAGE_KEY: &str = "user";

pub const REVALIDATE_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const PUBLIC_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH, REGISTER_PATH];

/// Navigation that replaces the current history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Dashboard,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => LOGIN_PATH,
            Redirect::Dashboard => DASHBOARD_PATH,
        }
    }
}

pub fn is_public_path(path: &str) -> bool {
    let normalized = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    PUBLIC_PATHS.contains(&normalized)
}

pub fn redirect_for(authenticated: bool, path: &str) -> Option<Redirect> {
    match (authenticated, is_public_path(path)) {
        (false, false) => Some(Redirect::Login),
        (true, true) => Some(Redirect::Dashboard),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StoredSession {
    Absent,
    Malformed,
    Present(Session),
}

pub struct SessionManager {
    storage: Rc<dyn KeyValueStore>,
    session: Option<Session>,
}

impl SessionManager {
    /// Restores the stored record as a candidate session. Expiry is not checked
    /// until [`SessionManager::validate`] runs.
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let session = match read_stored(storage.as_ref()) {
            StoredSession::Present(session) => {
                log::debug!("restored stored session for {}", session.email);
                Some(session)
            }
            StoredSession::Malformed | StoredSession::Absent => None,
        };
        Self { storage, session }
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Re-derives the session from storage and decides where `path` should go.
    /// Safe to call any number of times.
    pub fn validate(&mut self, path: &str, now: DateTime<Utc>) -> Option<Redirect> {
        self.session = match read_stored(self.storage.as_ref()) {
            StoredSession::Absent => None,
            StoredSession::Malformed => {
                log::warn!("stored session is unreadable; clearing it");
                self.storage.remove(SESSION_STORAGE_KEY);
                None
            }
            StoredSession::Present(session) if session.is_expired(now) => {
                log::info!("session for {} has expired", session.email);
                self.storage.remove(SESSION_STORAGE_KEY);
                None
            }
            StoredSession::Present(session) => Some(session),
        };

        let redirect = redirect_for(self.is_authenticated(), path);
        if let Some(target) = redirect {
            log::debug!("redirecting {} -> {}", path, target.path());
        }
        redirect
    }

    /// Replaces any previous session wholesale.
    pub fn login(&mut self, session: Session) -> Redirect {
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(SESSION_STORAGE_KEY, &raw) {
                    log::warn!("session not persisted: {}", err);
                }
            }
            Err(err) => log::warn!("session not serialisable: {}", err),
        }
        log::info!("logged in as {}", session.email);
        self.session = Some(session);
        Redirect::Dashboard
    }

    pub fn logout(&mut self) -> Redirect {
        self.storage.remove(SESSION_STORAGE_KEY);
        if let Some(previous) = self.session.take() {
            log::info!("logged out {}", previous.email);
        }
        Redirect::Login
    }
}

fn read_stored(storage: &dyn KeyValueStore) -> StoredSession {
    match storage.get(SESSION_STORAGE_KEY) {
        None => StoredSession::Absent,
        Some(raw) => match serde_json::from_str::<Session>(&raw) {
            Ok(session) => StoredSession::Present(session),
            Err(err) => {
                log::debug!("stored session does not parse: {}", err);
                StoredSession::Malformed
            }
        },
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::utils::token::test_tokens::expiring_at;
    use chrono::Duration as ChronoDuration;

    pub fn session_expiring_at(exp: DateTime<Utc>) -> Session {
        Session {
            id: "u1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            token: expiring_at(exp.timestamp()),
        }
    }

    pub fn valid_session() -> Session {
        session_expiring_at(Utc::now() + ChronoDuration::hours(1))
    }
}
