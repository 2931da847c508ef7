#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

use crate::api::{Completion, Habit, HabitStats, HabitType};
use chrono::{DateTime, Utc};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn habit(id: &str, name: &str) -> Habit {
    Habit {
        id: id.into(),
        name: name.into(),
        habit_type: HabitType::Daily,
        goal: None,
        frequency: None,
        created_at: at("2025-01-01T09:00:00Z"),
        completions: Vec::new(),
    }
}

pub fn habit_completed_at(id: &str, name: &str, instants: &[DateTime<Utc>]) -> Habit {
    Habit {
        completions: instants.iter().map(|date| Completion { date: *date }).collect(),
        ..habit(id, name)
    }
}

pub fn stats() -> HabitStats {
    HabitStats {
        current_streak: 3,
        longest_streak: 7,
        completion_percentage: 42.5,
        total_completions: 12,
    }
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}
