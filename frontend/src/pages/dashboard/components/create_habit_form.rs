use crate::{
    api::HabitType,
    components::error::InlineErrorMessage,
    pages::dashboard::utils::HabitFormState,
};
use leptos::{ev::SubmitEvent, *};

/// A single edit made through the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Name(String),
    HabitType(HabitType),
    Goal(String),
    Frequency(String),
}

impl FormEdit {
    pub fn apply(self, state: &mut HabitFormState) {
        match self {
            FormEdit::Name(value) => state.name = value,
            FormEdit::HabitType(habit_type) => state.habit_type = habit_type,
            FormEdit::Goal(value) => state.goal = value,
            FormEdit::Frequency(value) => state.frequency = value,
        }
    }
}

#[component]
pub fn CreateHabitForm(
    form: Signal<HabitFormState>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_edit: Callback<FormEdit>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_weekly = create_memo(move |_| form.with(|state| state.habit_type == HabitType::Weekly));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <section class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"Create a New Habit"</h2>
            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="habit-name" class="block text-sm font-medium text-gray-700">"Habit Name"</label>
                    <input
                        id="habit-name"
                        type="text"
                        required
                        placeholder="e.g. Read for 20 minutes"
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                        prop:value=move || form.with(|state| state.name.clone())
                        on:input=move |ev| on_edit.call(FormEdit::Name(event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="habit-type" class="block text-sm font-medium text-gray-700">"Type"</label>
                    <select
                        id="habit-type"
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm sm:text-sm"
                        prop:value=move || form.with(|state| state.habit_type.as_str())
                        on:change=move |ev| {
                            if let Some(habit_type) = HabitType::parse(&event_target_value(&ev)) {
                                on_edit.call(FormEdit::HabitType(habit_type));
                            }
                        }
                    >
                        <option value="daily">{HabitType::Daily.label()}</option>
                        <option value="weekly">{HabitType::Weekly.label()}</option>
                    </select>
                </div>
                <Show when=move || is_weekly.get()>
                    <div>
                        <label for="habit-frequency" class="block text-sm font-medium text-gray-700">
                            "Times per week"
                        </label>
                        <input
                            id="habit-frequency"
                            type="number"
                            min="1"
                            max="7"
                            required
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm sm:text-sm"
                            prop:value=move || form.with(|state| state.frequency.clone())
                            on:input=move |ev| on_edit.call(FormEdit::Frequency(event_target_value(&ev)))
                        />
                    </div>
                </Show>
                <div>
                    <label for="habit-goal" class="block text-sm font-medium text-gray-700">
                        "Goal (optional)"
                    </label>
                    <input
                        id="habit-goal"
                        type="number"
                        min="1"
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm sm:text-sm"
                        prop:value=move || form.with(|state| state.goal.clone())
                        on:input=move |ev| on_edit.call(FormEdit::Goal(event_target_value(&ev)))
                    />
                </div>
                <InlineErrorMessage error=error />
                <button
                    type="submit"
                    class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Adding..." } else { "Add Habit" }}
                </button>
            </form>
        </section>
    }
}
