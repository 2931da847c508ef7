use crate::{
    api::Habit,
    pages::habit_detail::utils::{completed_days, CalendarMonth},
    utils::time,
};
use chrono::{Datelike, NaiveDate};
use leptos::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CompletionCalendar(
    habit: Habit,
    #[prop(optional)] initial_day: Option<NaiveDate>,
) -> impl IntoView {
    let today = time::today();
    let month = create_rw_signal(CalendarMonth::containing(initial_day.unwrap_or(today)));
    let completed = store_value(completed_days(&habit, time::viewer_day));

    let cell_class = move |day: NaiveDate| {
        let done = completed.with_value(|days| days.contains(&day));
        match (done, day == today) {
            (true, _) => "h-10 flex items-center justify-center rounded-full bg-green-500 text-white font-semibold habit-completed",
            (false, true) => "h-10 flex items-center justify-center rounded-full ring-2 ring-indigo-400 text-gray-900",
            (false, false) => "h-10 flex items-center justify-center rounded-full text-gray-700",
        }
    };

    view! {
        <section class="bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Completion History"</h3>
            <div class="flex items-center justify-between mb-2">
                <button
                    type="button"
                    class="px-2 py-1 rounded hover:bg-gray-100"
                    aria-label="Previous month"
                    on:click=move |_| month.update(|m| *m = m.previous())
                >
                    "‹"
                </button>
                <span class="font-medium text-gray-900">{move || month.get().title()}</span>
                <button
                    type="button"
                    class="px-2 py-1 rounded hover:bg-gray-100"
                    aria-label="Next month"
                    on:click=move |_| month.update(|m| *m = m.next())
                >
                    "›"
                </button>
            </div>
            <table class="w-full table-fixed text-sm">
                <thead>
                    <tr>
                        {WEEKDAYS
                            .iter()
                            .map(|name| view! { <th class="py-1 text-gray-500 font-medium">{*name}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        month
                            .get()
                            .weeks()
                            .into_iter()
                            .map(|week| {
                                view! {
                                    <tr>
                                        {week
                                            .into_iter()
                                            .map(|cell| match cell {
                                                Some(day) => view! {
                                                    <td class="p-1">
                                                        <div class=cell_class(day)>{day.day()}</div>
                                                    </td>
                                                },
                                                None => view! { <td class="p-1"></td> },
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
