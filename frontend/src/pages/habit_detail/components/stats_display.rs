use crate::{api::HabitStats, pages::habit_detail::utils::success_rate};
use leptos::*;

#[component]
fn StatCard(label: &'static str, value: String, unit: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4 text-center">
            <p class="text-2xl font-bold text-indigo-600">{value}</p>
            <p class="text-sm font-medium text-gray-900">{label}</p>
            <p class="text-xs text-gray-500">{unit}</p>
        </div>
    }
}

#[component]
pub fn StatsDisplay(stats: HabitStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard label="Current Streak" value=stats.current_streak.to_string() unit="days" />
            <StatCard label="Longest Streak" value=stats.longest_streak.to_string() unit="days" />
            <StatCard label="Success Rate" value=success_rate(stats.completion_percentage) unit="overall" />
            <StatCard label="Total Completions" value=stats.total_completions.to_string() unit="times" />
        </div>
    }
}
