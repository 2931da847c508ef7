use crate::api::{ApiError, Habit, HabitStats};
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDetail {
    pub habit: Habit,
    pub stats: HabitStats,
}

/// What the detail page shows once loading settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetailView {
    Loaded(HabitDetail),
    NotFound,
    Failed(String),
}

impl DetailView {
    pub fn from_result(result: Result<HabitDetail, ApiError>) -> Self {
        match result {
            Ok(detail) => DetailView::Loaded(detail),
            Err(err) if err.is_not_found() => DetailView::NotFound,
            Err(err) => DetailView::Failed(err.error),
        }
    }
}

/// A calendar month, always anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn containing(day: NaiveDate) -> Self {
        Self {
            first: day.with_day(1).unwrap_or(day),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self.first.checked_sub_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.first.checked_add_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        if next == self.first {
            return 31;
        }
        (next - self.first).num_days() as u32
    }

    /// Sunday-first weeks; `None` pads the leading and trailing cells.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let leading = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        cells.extend(
            self.first
                .iter_days()
                .take(self.days_in_month() as usize)
                .map(Some),
        );
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|week| {
                let mut row = [None; 7];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }
}

pub fn completed_days(
    habit: &Habit,
    to_day: impl Fn(&DateTime<Utc>) -> NaiveDate,
) -> BTreeSet<NaiveDate> {
    habit
        .completions
        .iter()
        .map(|completion| to_day(&completion.date))
        .collect()
}

pub fn success_rate(percentage: f64) -> String {
    format!("{}%", percentage)
}
