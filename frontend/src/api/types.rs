use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::utils::token;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Authenticated principal as returned by `/users/login` and `/users/register`
/// and as persisted in durable storage. Every field is required, so a record
/// either parses completely or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl Session {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        token::decode_expiry(&self.token)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        token::is_expired(&self.token, now)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    #[default]
    Daily,
    Weekly,
}

impl HabitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitType::Daily => "daily",
            HabitType::Weekly => "weekly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitType::Daily => "Daily",
            HabitType::Weekly => "Weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(HabitType::Daily),
            "weekly" => Some(HabitType::Weekly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    #[serde(default)]
    pub goal: Option<u32>,
    #[serde(default)]
    pub frequency: Option<u32>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completions: Vec<Completion>,
}

impl Habit {
    /// Frequency only carries meaning for weekly habits.
    pub fn weekly_frequency(&self) -> Option<u32> {
        match self.habit_type {
            HabitType::Weekly => self.frequency,
            HabitType::Daily => None,
        }
    }

    pub fn completed_on(&self, day: NaiveDate, to_day: impl Fn(&DateTime<Utc>) -> NaiveDate) -> bool {
        self.completions
            .iter()
            .any(|completion| to_day(&completion.date) == day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_percentage: f64,
    pub total_completions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub completions: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] = [ChartPeriod::Week, ChartPeriod::Month, ChartPeriod::Quarter];

    pub fn as_query(&self) -> &'static str {
        match self {
            ChartPeriod::Week => "7d",
            ChartPeriod::Month => "30d",
            ChartPeriod::Quarter => "90d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::Week => "Last 7 days",
            ChartPeriod::Month => "Last 30 days",
            ChartPeriod::Quarter => "Last 90 days",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.as_query() == value)
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationResult {
    pub migrated_completions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    pub fn parse_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
        }
    }

    /// Prefers the body's `message` field, then the transport-style status message.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        Self {
            error: message,
            code: format!("HTTP_{}", status),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "HTTP_404"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_accepts_mongo_style_id() {
        let session: Session = serde_json::from_value(json!({
            "_id": "65f0",
            "name": "Ana",
            "email": "ana@example.com",
            "token": "a.b.c"
        }))
        .unwrap();
        assert_eq!(session.id, "65f0");
    }

    #[test]
    fn session_missing_field_does_not_parse() {
        let parsed = serde_json::from_value::<Session>(json!({
            "_id": "65f0",
            "name": "Ana",
            "email": "ana@example.com"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn deserialize_habit_with_wire_names() {
        let habit: Habit = serde_json::from_value(json!({
            "_id": "h1",
            "name": "Run",
            "type": "weekly",
            "frequency": 3,
            "createdAt": "2025-01-02T10:00:00.000Z",
            "completions": [{ "date": "2025-01-03T08:30:00.000Z", "_id": "c1" }]
        }))
        .unwrap();
        assert_eq!(habit.habit_type, HabitType::Weekly);
        assert_eq!(habit.weekly_frequency(), Some(3));
        assert_eq!(habit.goal, None);
        assert_eq!(habit.completions.len(), 1);
    }

    #[test]
    fn daily_habit_ignores_frequency() {
        let habit: Habit = serde_json::from_value(json!({
            "_id": "h1",
            "name": "Read",
            "type": "daily",
            "frequency": 4,
            "createdAt": "2025-01-02T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(habit.weekly_frequency(), None);
        assert!(habit.completions.is_empty());
    }

    #[test]
    fn create_request_omits_absent_optionals() {
        let request = CreateHabitRequest {
            name: "Read".into(),
            habit_type: HabitType::Daily,
            goal: None,
            frequency: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "name": "Read", "type": "daily" })
        );
    }

    #[test]
    fn stats_and_migration_use_camel_case() {
        let stats: HabitStats = serde_json::from_value(json!({
            "currentStreak": 3,
            "longestStreak": 9,
            "completionPercentage": 42.5,
            "totalCompletions": 17
        }))
        .unwrap();
        assert_eq!(stats.longest_streak, 9);
        let migration: MigrationResult =
            serde_json::from_value(json!({ "migratedCompletions": 12 })).unwrap();
        assert_eq!(migration.migrated_completions, 12);
    }

    #[test]
    fn chart_period_round_trips_query_values() {
        for period in ChartPeriod::ALL {
            assert_eq!(ChartPeriod::parse(period.as_query()), Some(period));
        }
        assert_eq!(ChartPeriod::default(), ChartPeriod::Month);
        assert!(ChartPeriod::parse("1y").is_none());
    }

    #[test]
    fn api_error_prefers_body_message() {
        let error = ApiError::from_status_body(400, r#"{"message":"Habit name taken"}"#);
        assert_eq!(error.to_string(), "Habit name taken");
        assert_eq!(error.code, "HTTP_400");
    }

    #[test]
    fn api_error_falls_back_to_status_message() {
        let error = ApiError::from_status_body(500, "<html>oops</html>");
        assert_eq!(error.error, "Request failed with status code 500");
        let blank = ApiError::from_status_body(404, r#"{"message":"  "}"#);
        assert_eq!(blank.error, "Request failed with status code 404");
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert!(ApiError::validation("bad").is_validation());
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }
}
