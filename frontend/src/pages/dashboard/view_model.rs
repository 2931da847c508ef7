use super::{
    repository::HabitsRepository,
    utils::{
        create_failed_message, created_message, delete_failed_message, deleted_message,
        migration_message, track_failed_message, ChartState, HabitFormState, HabitListState,
        TrackOutcome,
    },
};
use crate::api::{ApiClient, ApiError, ChartPeriod, Habit};
use crate::state::toast::use_toasts;
use crate::utils::time;
use leptos::*;
use std::rc::Rc;

pub async fn load_habits(repo: &HabitsRepository, list: RwSignal<HabitListState>) {
    list.update(|state| state.begin_loading());
    let result = repo.fetch_habits().await;
    if let Err(err) = &result {
        log::warn!("failed to load habits: {}", err);
    }
    list.update(|state| state.finish_loading(result));
}

/// Returns whether the response was applied; a newer request supersedes it otherwise.
pub async fn load_chart(
    repo: &HabitsRepository,
    chart: RwSignal<ChartState>,
    period: ChartPeriod,
) -> bool {
    let mut ticket = 0;
    chart.update(|state| ticket = state.begin(period));
    let result = repo.fetch_chart(period).await;
    let mut applied = false;
    chart.update(|state| applied = state.apply(ticket, result));
    applied
}

/// Validates before any request; the habit is added only once the server confirms it.
pub async fn create_habit(
    repo: &HabitsRepository,
    list: RwSignal<HabitListState>,
    form: HabitFormState,
) -> Result<Habit, ApiError> {
    let request = form.to_request().map_err(ApiError::validation)?;
    let habit = repo.create_habit(&request).await?;
    list.update(|state| state.prepend(habit.clone()));
    Ok(habit)
}

pub async fn track_habit(
    repo: &HabitsRepository,
    list: RwSignal<HabitListState>,
    habit_id: &str,
) -> Result<TrackOutcome, ApiError> {
    let habit = repo.track_habit(habit_id).await?;
    let outcome = TrackOutcome::classify(&habit, time::today(), time::viewer_day);
    list.update(|state| {
        state.replace(habit);
    });
    Ok(outcome)
}

pub async fn delete_habit(
    repo: &HabitsRepository,
    list: RwSignal<HabitListState>,
    habit_id: &str,
) -> Result<(), ApiError> {
    repo.delete_habit(habit_id).await?;
    list.update(|state| {
        state.remove(habit_id);
    });
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub list: RwSignal<HabitListState>,
    pub chart: RwSignal<ChartState>,
    pub selected_period: RwSignal<ChartPeriod>,
    pub form: RwSignal<HabitFormState>,
    pub form_error: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<PendingDelete>>,
    pub migration_confirm_open: RwSignal<bool>,
    pub migration_status: RwSignal<Option<Result<String, String>>>,
    pub create_action: Action<HabitFormState, Result<Habit, ApiError>>,
    pub track_action: Action<String, Result<TrackOutcome, ApiError>>,
    pub delete_action: Action<PendingDelete, (PendingDelete, Result<(), ApiError>)>,
    pub migrate_action: Action<(), Result<u64, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::with_repository(HabitsRepository::new_with_client(Rc::new(api)))
    }

    pub fn with_repository(repo: HabitsRepository) -> Self {
        let toasts = use_toasts();
        let list = create_rw_signal(HabitListState::default());
        let chart = create_rw_signal(ChartState::default());
        let selected_period = create_rw_signal(ChartPeriod::default());
        let form = create_rw_signal(HabitFormState::default());
        let form_error = create_rw_signal(None::<String>);
        let pending_delete = create_rw_signal(None::<PendingDelete>);
        let migration_confirm_open = create_rw_signal(false);
        let migration_status = create_rw_signal(None::<Result<String, String>>);

        let repo_for_create = repo.clone();
        let create_habit_action = create_action(move |input: &HabitFormState| {
            let repo = repo_for_create.clone();
            let input = input.clone();
            async move { create_habit(&repo, list, input).await }
        });

        let repo_for_track = repo.clone();
        let track_action = create_action(move |habit_id: &String| {
            let repo = repo_for_track.clone();
            let habit_id = habit_id.clone();
            async move { track_habit(&repo, list, &habit_id).await }
        });

        let repo_for_delete = repo.clone();
        let delete_action = create_action(move |target: &PendingDelete| {
            let repo = repo_for_delete.clone();
            let target = target.clone();
            async move {
                let result = delete_habit(&repo, list, &target.id).await;
                (target, result)
            }
        });

        let repo_for_migrate = repo.clone();
        let migrate_action = create_action(move |_: &()| {
            let repo = repo_for_migrate.clone();
            async move {
                repo.migrate_completions()
                    .await
                    .map(|result| result.migrated_completions)
            }
        });

        let repo = store_value(repo);

        // Initial habit load, once per page activation.
        create_effect(move |_| {
            let repo = repo.get_value();
            spawn_local(async move { load_habits(&repo, list).await });
        });

        create_effect(move |_| {
            let period = selected_period.get();
            let repo = repo.get_value();
            spawn_local(async move {
                load_chart(&repo, chart, period).await;
            });
        });

        create_effect(move |_| {
            if let Some(result) = create_habit_action.value().get() {
                match result {
                    Ok(habit) => {
                        form.update(|state| state.reset());
                        form_error.set(None);
                        toasts.success(created_message(&habit.name));
                    }
                    Err(err) => {
                        form_error.set(Some(err.error.clone()));
                        toasts.error(create_failed_message(&err));
                    }
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = track_action.value().get() {
                match result {
                    Ok(outcome) => toasts.success(outcome.message()),
                    Err(err) => toasts.error(track_failed_message(&err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some((target, result)) = delete_action.value().get() {
                match result {
                    Ok(()) => {
                        toasts.success(deleted_message(&target.name));
                        // Aggregates in the chart may include the deleted habit.
                        let period = chart.with_untracked(|state| state.period);
                        let repo = repo.get_value();
                        spawn_local(async move {
                            load_chart(&repo, chart, period).await;
                        });
                    }
                    Err(err) => toasts.error(delete_failed_message(&err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = migrate_action.value().get() {
                let message = migration_message(&result);
                migration_status.set(Some(match result {
                    Ok(_) => Ok(message),
                    Err(_) => Err(message),
                }));
            }
        });

        Self {
            list,
            chart,
            selected_period,
            form,
            form_error,
            pending_delete,
            migration_confirm_open,
            migration_status,
            create_action: create_habit_action,
            track_action,
            delete_action,
            migrate_action,
        }
    }

    pub fn submit_form(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        self.form_error.set(None);
        self.create_action.dispatch(self.form.get_untracked());
    }

    pub fn edit_form(&self, edit: impl FnOnce(&mut HabitFormState)) {
        self.form_error.set(None);
        self.form.update(edit);
    }

    pub fn select_period(&self, period: ChartPeriod) {
        if self.selected_period.get_untracked() != period {
            self.selected_period.set(period);
        }
    }

    pub fn track(&self, habit_id: String) {
        self.track_action.dispatch(habit_id);
    }

    pub fn request_delete(&self, habit: &Habit) {
        self.pending_delete.set(Some(PendingDelete {
            id: habit.id.clone(),
            name: habit.name.clone(),
        }));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(target) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(target);
        }
    }

    pub fn request_migration(&self) {
        self.migration_confirm_open.set(true);
    }

    pub fn cancel_migration(&self) {
        self.migration_confirm_open.set(false);
    }

    pub fn confirm_migration(&self) {
        self.migration_confirm_open.set(false);
        if self.migrate_action.pending().get_untracked() {
            return;
        }
        self.migration_status.set(None);
        self.migrate_action.dispatch(());
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
