use crate::api::{
    ApiClient, ApiError, ChartPeriod, ChartPoint, CreateHabitRequest, Habit, MigrationResult,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct HabitsRepository {
    client: Rc<ApiClient>,
}

impl Default for HabitsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_habits(&self) -> Result<Vec<Habit>, ApiError> {
        self.client.get_habits().await
    }

    pub async fn create_habit(&self, request: &CreateHabitRequest) -> Result<Habit, ApiError> {
        self.client.create_habit(request).await
    }

    pub async fn track_habit(&self, habit_id: &str) -> Result<Habit, ApiError> {
        self.client.track_habit(habit_id).await
    }

    pub async fn delete_habit(&self, habit_id: &str) -> Result<(), ApiError> {
        self.client.delete_habit(habit_id).await
    }

    pub async fn fetch_chart(&self, period: ChartPeriod) -> Result<Vec<ChartPoint>, ApiError> {
        self.client.get_chart_data(period).await
    }

    pub async fn migrate_completions(&self) -> Result<MigrationResult, ApiError> {
        self.client.migrate_completions().await
    }
}
