use crate::{
    api::{ApiClient, ApiError},
    pages::dashboard::utils::{delete_failed_message, deleted_message},
    state::toast::use_toasts,
};
use leptos::*;
use leptos_router::use_params_map;
use std::rc::Rc;

use super::{
    repository::HabitDetailRepository,
    utils::{DetailView, HabitDetail},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy)]
pub struct HabitDetailViewModel {
    pub habit_id: Signal<String>,
    pub detail: Resource<String, DetailView>,
    pub confirm_open: RwSignal<bool>,
    pub delete_action: Action<DeleteTarget, (DeleteTarget, Result<(), ApiError>)>,
    /// Set once the habit is gone and the page should leave.
    pub deleted: RwSignal<bool>,
}

pub async fn load_detail(repo: &HabitDetailRepository, habit_id: &str) -> DetailView {
    if habit_id.trim().is_empty() {
        return DetailView::NotFound;
    }
    let result = repo.fetch_detail(habit_id).await;
    if let Err(err) = &result {
        log::warn!("habit {} failed to load: {}", habit_id, err);
    }
    DetailView::from_result(result)
}

impl HabitDetailViewModel {
    pub fn new(habit_id: Signal<String>) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::with_repository(habit_id, HabitDetailRepository::new_with_client(Rc::new(api)))
    }

    pub fn with_repository(habit_id: Signal<String>, repo: HabitDetailRepository) -> Self {
        let toasts = use_toasts();
        let confirm_open = create_rw_signal(false);
        let deleted = create_rw_signal(false);

        let repo_for_load = repo.clone();
        let detail = create_resource(
            move || habit_id.get(),
            move |id| {
                let repo = repo_for_load.clone();
                async move { load_detail(&repo, &id).await }
            },
        );

        let delete_action = create_action(move |target: &DeleteTarget| {
            let repo = repo.clone();
            let target = target.clone();
            async move {
                let result = repo.delete_habit(&target.id).await;
                (target, result)
            }
        });

        create_effect(move |_| {
            if let Some((target, result)) = delete_action.value().get() {
                match result {
                    Ok(()) => {
                        toasts.success(deleted_message(&target.name));
                        deleted.set(true);
                    }
                    Err(err) => toasts.error(delete_failed_message(&err)),
                }
            }
        });

        Self {
            habit_id,
            detail,
            confirm_open,
            delete_action,
            deleted,
        }
    }

    pub fn request_delete(&self) {
        self.confirm_open.set(true);
    }

    pub fn cancel_delete(&self) {
        self.confirm_open.set(false);
    }

    pub fn confirm_delete(&self, detail: &HabitDetail) {
        self.confirm_open.set(false);
        if self.delete_action.pending().get_untracked() {
            return;
        }
        self.delete_action.dispatch(DeleteTarget {
            id: detail.habit.id.clone(),
            name: detail.habit.name.clone(),
        });
    }
}

/// Reads the `:id` route parameter.
pub fn use_habit_detail_view_model() -> HabitDetailViewModel {
    let params = use_params_map();
    let habit_id = Signal::derive(move || params.with(|map| map.get("id").cloned().unwrap_or_default()));
    HabitDetailViewModel::new(habit_id)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> HabitDetailRepository {
        HabitDetailRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn blank_id_is_not_found_without_a_request() {
        let server = MockServer::start_async().await;
        let any = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200);
            })
            .await;

        assert_eq!(load_detail(&repo(&server), "  ").await, DetailView::NotFound);
        assert_eq!(any.hits_async().await, 0);
    }

    #[tokio::test]
    async fn unreachable_server_reports_failure() {
        let repo = HabitDetailRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            "http://127.0.0.1:9/api",
        )));
        assert!(matches!(load_detail(&repo, "h1").await, DetailView::Failed(_)));
    }

    #[tokio::test]
    async fn loads_detail_for_known_habit() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/habits/h1");
                then.status(200).json_body(json!({
                    "_id": "h1",
                    "name": "Read",
                    "type": "weekly",
                    "frequency": 3,
                    "createdAt": "2025-01-02T10:00:00.000Z",
                    "completions": []
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/habits/h1/stats");
                then.status(200).json_body(json!({
                    "currentStreak": 0,
                    "longestStreak": 0,
                    "completionPercentage": 0,
                    "totalCompletions": 0
                }));
            })
            .await;

        match load_detail(&repo(&server), "h1").await {
            DetailView::Loaded(detail) => {
                assert_eq!(detail.habit.weekly_frequency(), Some(3));
                assert_eq!(detail.stats.total_completions, 0);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn delete_confirmation_toggles_dialog() {
        leptos_reactive::suppress_resource_load(true);
        crate::test_support::with_runtime(|| {
            let repo = HabitDetailRepository::new_with_client(Rc::new(
                ApiClient::new_with_base_url("http://127.0.0.1:9/api"),
            ));
            let vm = HabitDetailViewModel::with_repository(Signal::derive(|| "h1".to_string()), repo);
            vm.request_delete();
            assert!(vm.confirm_open.get_untracked());
            vm.cancel_delete();
            assert!(!vm.confirm_open.get_untracked());
            assert!(!vm.deleted.get_untracked());
        });
        leptos_reactive::suppress_resource_load(false);
    }
}
