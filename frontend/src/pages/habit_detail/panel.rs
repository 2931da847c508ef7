use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::{
        dashboard::utils::delete_confirmation,
        habit_detail::{
            components::{CompletionCalendar, StatsDisplay},
            utils::{DetailView, HabitDetail},
            view_model::{use_habit_detail_view_model, HabitDetailViewModel},
        },
    },
    state::session::DASHBOARD_PATH,
    utils::time,
};
use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn HabitDetailPage() -> impl IntoView {
    let vm = use_habit_detail_view_model();

    create_effect(move |_| {
        if vm.deleted.get() {
            let navigate = use_navigate();
            navigate(DASHBOARD_PATH, after_delete_navigation());
        }
    });

    view! { <HabitDetailContent vm=vm /> }
}

/// The deleted habit's page must not stay reachable through "back".
fn after_delete_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

#[component]
pub fn HabitDetailContent(vm: HabitDetailViewModel) -> impl IntoView {
    view! {
        <Title text="Habit | HabitTracker"/>
        {move || match vm.detail.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(DetailView::Loaded(detail)) => view! { <HabitDetailBody vm=vm detail=detail /> }.into_view(),
            Some(DetailView::NotFound) => view! {
                <p class="text-gray-700">"Habit not found."</p>
            }
            .into_view(),
            Some(DetailView::Failed(message)) => view! {
                <ErrorMessage message=format!("Error: {}", message) />
            }
            .into_view(),
        }}
    }
}

#[component]
fn HabitDetailBody(vm: HabitDetailViewModel, detail: HabitDetail) -> impl IntoView {
    let habit = detail.habit.clone();
    let created_on = time::viewer_day(&habit.created_at)
        .format("%b %-d, %Y")
        .to_string();
    let delete_label = format!("Delete {}", habit.name);
    let confirm_message = delete_confirmation(&habit.name);
    let target = store_value(detail.clone());
    let delete_pending = vm.delete_action.pending();

    view! {
        <div class="space-y-6">
            <header class="space-y-2">
                <a href=DASHBOARD_PATH class="text-sm text-indigo-600 hover:underline">
                    "Back to Dashboard"
                </a>
                <div class="flex items-start justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">{habit.name.clone()}</h1>
                        <p class="text-sm text-gray-500">"Created on: " {created_on}</p>
                    </div>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-sm font-medium text-white bg-red-600 hover:bg-red-700 disabled:opacity-50"
                        title="Delete this habit"
                        aria-label=delete_label
                        disabled=move || delete_pending.get()
                        on:click=move |_| vm.request_delete()
                    >
                        "Delete Habit"
                    </button>
                </div>
            </header>
            <StatsDisplay stats=detail.stats />
            <CompletionCalendar habit=habit />
            <ConfirmDialog
                is_open=vm.confirm_open.into()
                title="Delete habit"
                message=confirm_message
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || delete_pending.get())
                destructive=true
                on_confirm=Callback::new(move |_| target.with_value(|detail| vm.confirm_delete(detail)))
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
