use crate::api::{ApiError, ChartPeriod, ChartPoint, CreateHabitRequest, Habit, HabitType};
use crate::utils::time;
use chrono::{DateTime, NaiveDate, Utc};

/// Habits shown on the dashboard, most recently created first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitListState {
    pub habits: Vec<Habit>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HabitListState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// A failed load keeps the previous habits on screen.
    pub fn finish_loading(&mut self, result: Result<Vec<Habit>, ApiError>) {
        match result {
            Ok(habits) => {
                self.habits = habits;
                self.error = None;
            }
            Err(err) => self.error = Some(err.error),
        }
        self.loading = false;
    }

    pub fn prepend(&mut self, habit: Habit) {
        self.habits.insert(0, habit);
    }

    pub fn replace(&mut self, habit: Habit) -> bool {
        match self.habits.iter_mut().find(|existing| existing.id == habit.id) {
            Some(slot) => {
                *slot = habit;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, habit_id: &str) -> bool {
        match self.habits.iter().position(|habit| habit.id == habit_id) {
            Some(index) => {
                self.habits.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Chart series for the selected period. Every request takes a ticket and only
/// the most recently issued ticket may write its response.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub period: ChartPeriod,
    pub points: Vec<ChartPoint>,
    pub loading: bool,
    pub error: Option<String>,
    latest_ticket: u64,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            period: ChartPeriod::default(),
            points: Vec::new(),
            loading: false,
            error: None,
            latest_ticket: 0,
        }
    }
}

impl ChartState {
    pub fn begin(&mut self, period: ChartPeriod) -> u64 {
        self.latest_ticket += 1;
        self.period = period;
        self.loading = true;
        self.latest_ticket
    }

    pub fn apply(&mut self, ticket: u64, result: Result<Vec<ChartPoint>, ApiError>) -> bool {
        if ticket != self.latest_ticket {
            log::debug!(
                "discarding stale chart response #{} (latest #{})",
                ticket,
                self.latest_ticket
            );
            return false;
        }
        match result {
            Ok(points) => {
                self.points = points;
                self.error = None;
            }
            Err(err) => {
                self.points.clear();
                self.error = Some(err.error);
            }
        }
        self.loading = false;
        true
    }

    pub fn average(&self) -> Option<f64> {
        average_completions(&self.points)
    }
}

pub fn average_completions(points: &[ChartPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let total: u64 = points.iter().map(|point| u64::from(point.completions)).sum();
    Some(total as f64 / points.len() as f64)
}

/// Raw create-habit form input; numbers stay as typed until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitFormState {
    pub name: String,
    pub habit_type: HabitType,
    pub goal: String,
    pub frequency: String,
}

impl HabitFormState {
    pub fn to_request(&self) -> Result<CreateHabitRequest, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Habit name is required.".into());
        }

        let frequency = match self.habit_type {
            HabitType::Weekly => match parse_positive(&self.frequency) {
                Some(value) => Some(value),
                None => return Err("Weekly habits require a frequency of at least 1.".into()),
            },
            HabitType::Daily => None,
        };

        let goal = if self.goal.trim().is_empty() {
            None
        } else {
            match parse_positive(&self.goal) {
                Some(value) => Some(value),
                None => return Err("Goal must be a whole number of at least 1.".into()),
            }
        };

        Ok(CreateHabitRequest {
            name: name.to_string(),
            habit_type: self.habit_type,
            goal,
            frequency,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value >= 1)
}

pub fn is_completed_on(
    habit: &Habit,
    day: NaiveDate,
    to_day: impl Fn(&DateTime<Utc>) -> NaiveDate,
) -> bool {
    habit.completed_on(day, to_day)
}

/// Recomputed on each call; never cached on the habit.
pub fn is_completed_today(habit: &Habit) -> bool {
    is_completed_on(habit, time::today(), time::viewer_day)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    Tracked,
    Untracked,
}

impl TrackOutcome {
    pub fn classify(
        habit: &Habit,
        today: NaiveDate,
        to_day: impl Fn(&DateTime<Utc>) -> NaiveDate,
    ) -> Self {
        if is_completed_on(habit, today, to_day) {
            TrackOutcome::Tracked
        } else {
            TrackOutcome::Untracked
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TrackOutcome::Tracked => "Habit tracked! Great job!",
            TrackOutcome::Untracked => "Habit untracked.",
        }
    }
}

pub fn created_message(name: &str) -> String {
    format!("Habit \"{}\" created successfully!", name)
}

pub fn create_failed_message(err: &ApiError) -> String {
    if err.is_validation() {
        err.error.clone()
    } else {
        format!("Failed to create habit: {}", err.error)
    }
}

pub fn track_failed_message(err: &ApiError) -> String {
    format!("Update failed: {}", err.error)
}

pub fn deleted_message(name: &str) -> String {
    format!("\"{}\" has been deleted successfully.", name)
}

pub fn delete_failed_message(err: &ApiError) -> String {
    format!("Failed to delete habit: {}", err.error)
}

pub fn delete_confirmation(name: &str) -> String {
    format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone and will permanently remove all tracking data for this habit.",
        name
    )
}

pub fn migration_message(result: &Result<u64, ApiError>) -> String {
    match result {
        Ok(count) => format!("Migration successful! Migrated {} completion records.", count),
        Err(err) => format!("Migration failed: {}", err.error),
    }
}
