use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::dashboard::{
        components::{CreateHabitForm, FormEdit, HabitItem, MigrationHelper, ProgressChart},
        utils::delete_confirmation,
        view_model::DashboardViewModel,
    },
    state::auth::use_session,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();
    view! { <DashboardContent vm=vm /> }
}

#[component]
pub fn DashboardContent(vm: DashboardViewModel) -> impl IntoView {
    let session = use_session();
    let auth = session.state();
    let greeting = move || {
        auth.with(|state| {
            state
                .display_name()
                .map(|name| format!("Welcome, {}!", name))
                .unwrap_or_else(|| "Welcome!".to_string())
        })
    };

    let list = vm.list;
    let chart = vm.chart;
    let habits = create_memo(move |_| list.with(|state| state.habits.clone()));
    let track_pending = vm.track_action.pending();

    let delete_open = Signal::derive(move || vm.pending_delete.with(|target| target.is_some()));
    let delete_message = Signal::derive(move || {
        vm.pending_delete.with(|target| {
            target
                .as_ref()
                .map(|target| delete_confirmation(&target.name))
                .unwrap_or_default()
        })
    });

    view! {
        <Title text="Dashboard | HabitTracker"/>
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{greeting}</h1>

            <CreateHabitForm
                form=vm.form.into()
                error=vm.form_error.into()
                pending=vm.create_action.pending().into()
                on_edit=Callback::new(move |edit: FormEdit| {
                    vm.edit_form(|state| edit.apply(state))
                })
                on_submit=Callback::new(move |_| vm.submit_form())
            />

            <section class="space-y-3">
                <h2 class="text-lg font-semibold text-gray-900">"Your Habits"</h2>
                {move || {
                    let (loading, error, empty) = list.with(|state| {
                        (state.loading, state.error.clone(), state.habits.is_empty())
                    });
                    if loading && empty {
                        return view! { <LoadingSpinner /> }.into_view();
                    }
                    let banner = error.map(|message| view! { <ErrorMessage message=message /> });
                    if empty {
                        return view! {
                            {banner}
                            <EmptyState
                                title="No habits yet"
                                description="Create your first habit above to start tracking."
                            />
                        }
                        .into_view();
                    }
                    view! {
                        {banner}
                        <ul class="space-y-3">
                            <For
                                each=move || habits.get()
                                key=|habit| (habit.id.clone(), habit.completions.len())
                                children=move |habit| {
                                    view! {
                                        <HabitItem
                                            habit=habit
                                            busy=track_pending
                                            on_track=Callback::new(move |id: String| vm.track(id))
                                            on_delete=Callback::new(move |habit| vm.request_delete(&habit))
                                        />
                                    }
                                }
                            />
                        </ul>
                    }
                    .into_view()
                }}
            </section>

            <ProgressChart
                points=Signal::derive(move || chart.with(|state| state.points.clone()))
                loading=Signal::derive(move || chart.with(|state| state.loading))
                error=Signal::derive(move || chart.with(|state| state.error.clone()))
                period=vm.selected_period.into()
                on_period_change=Callback::new(move |period| vm.select_period(period))
            />

            <MigrationHelper
                confirm_open=vm.migration_confirm_open.into()
                pending=vm.migrate_action.pending().into()
                status=vm.migration_status.into()
                on_request=Callback::new(move |_| vm.request_migration())
                on_confirm=Callback::new(move |_| vm.confirm_migration())
                on_cancel=Callback::new(move |_| vm.cancel_migration())
            />

            <ConfirmDialog
                is_open=delete_open
                title="Delete habit"
                message=delete_message
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
