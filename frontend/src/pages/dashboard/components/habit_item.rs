use crate::{
    api::Habit,
    pages::dashboard::utils::is_completed_today,
    utils::time,
};
use leptos::*;

#[component]
pub fn HabitItem(
    habit: Habit,
    on_track: Callback<String>,
    on_delete: Callback<Habit>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let completed_today = is_completed_today(&habit);
    let detail_href = format!("/habit/{}", habit.id);
    let checkbox_id = format!("track-{}", habit.id);
    let created_on = time::viewer_day(&habit.created_at)
        .format("%b %-d, %Y")
        .to_string();
    let frequency = habit
        .weekly_frequency()
        .map(|count| format!("{}x per week", count));
    let delete_label = format!("Delete {}", habit.name);

    let track_id = habit.id.clone();
    let delete_target = habit.clone();

    view! {
        <li class="relative bg-white rounded-lg shadow-sm border border-gray-200 p-4">
            <button
                type="button"
                class="absolute top-3 right-3 text-gray-400 hover:text-red-600"
                title="Delete this habit"
                aria-label=delete_label
                on:click=move |ev| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_delete.call(delete_target.clone());
                }
            >
                "🗑️"
            </button>
            <a href=detail_href class="block pr-8">
                <h3 class="text-lg font-semibold text-gray-900">{habit.name.clone()}</h3>
                <p class="text-sm text-gray-500">
                    {habit.habit_type.label()}
                    {frequency.map(|text| format!(" · {}", text))}
                    " · Created on: "
                    {created_on}
                </p>
            </a>
            <label for=checkbox_id.clone() class="mt-3 inline-flex items-center gap-2 text-sm text-gray-700 cursor-pointer">
                <input
                    type="checkbox"
                    id=checkbox_id
                    class="h-4 w-4 rounded border-gray-300 text-indigo-600"
                    checked=completed_today
                    disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_track.call(track_id.clone());
                    }
                />
                "Today"
            </label>
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{habit, habit_completed_at, ssr::render_to_string};
    use chrono::{Duration, Utc};

    #[test]
    fn renders_link_and_unchecked_box() {
        let html = render_to_string(|| {
            view! {
                <HabitItem
                    habit=habit("h1", "Read")
                    on_track=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("href=\"/habit/h1\""));
        assert!(html.contains("Read"));
        assert!(html.contains("Delete Read"));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn completed_today_checks_the_box() {
        let html = render_to_string(|| {
            let done = habit_completed_at("h2", "Run", &[Utc::now()]);
            view! {
                <HabitItem
                    habit=done
                    on_track=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("checked"));
    }

    #[test]
    fn completion_two_days_ago_is_not_today() {
        let html = render_to_string(|| {
            let old = habit_completed_at("h3", "Code", &[Utc::now() - Duration::days(2)]);
            view! {
                <HabitItem
                    habit=old
                    on_track=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("checked"));
    }
}
