use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, layout::Layout},
    pages::{DashboardPage, HabitDetailPage, HomePage, LoginPage, RegisterPage},
    state::{
        auth::{provide_session, SessionProvider},
        toast::{provide_toasts, ToastHost},
    },
    utils::storage::BrowserStorage,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/register", "/dashboard", "/habit/:id"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/habit/:id"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_session(Rc::new(BrowserStorage));
    provide_toasts();

    view! {
        <Router>
            <SessionProvider>
                <Layout>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                        <Route path="/dashboard" view=ProtectedDashboard/>
                        <Route path="/habit/:id" view=ProtectedHabitDetail/>
                    </Routes>
                </Layout>
            </SessionProvider>
        </Router>
        <ToastHost/>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedHabitDetail() -> impl IntoView {
    view! { <RequireAuth><HabitDetailPage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{is_public_path, PUBLIC_PATHS};
    use std::collections::HashSet;

    #[test]
    fn protected_and_public_routes_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(&protected | &public, all);
    }

    #[test]
    fn public_routes_match_session_rules() {
        assert_eq!(PUBLIC_ROUTE_PATHS, PUBLIC_PATHS);
        for path in PROTECTED_ROUTE_PATHS {
            assert!(!is_public_path(path), "{} should require a session", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
