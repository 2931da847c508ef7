use super::{
    client::{encode_segment, ApiClient},
    types::{
        ApiError, ChartPeriod, ChartPoint, CreateHabitRequest, Habit, HabitStats, MigrationResult,
    },
};

impl ApiClient {
    pub async fn get_habits(&self) -> Result<Vec<Habit>, ApiError> {
        let url = self.url("/habits").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn create_habit(&self, request: &CreateHabitRequest) -> Result<Habit, ApiError> {
        let url = self.url("/habits").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        Self::parse_json(response).await
    }

    /// Toggles today's completion; the server decides between mark and unmark.
    pub async fn track_habit(&self, habit_id: &str) -> Result<Habit, ApiError> {
        let url = self
            .url(&format!("/habits/{}/track", encode_segment(habit_id)))
            .await;
        let response = self.send(self.http_client().post(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn get_habit(&self, habit_id: &str) -> Result<Habit, ApiError> {
        let url = self.url(&format!("/habits/{}", encode_segment(habit_id))).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn get_habit_stats(&self, habit_id: &str) -> Result<HabitStats, ApiError> {
        let url = self
            .url(&format!("/habits/{}/stats", encode_segment(habit_id)))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn get_chart_data(&self, period: ChartPeriod) -> Result<Vec<ChartPoint>, ApiError> {
        let url = self
            .url(&format!("/habits/chart-data?period={}", period.as_query()))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn delete_habit(&self, habit_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/habits/{}", encode_segment(habit_id))).await;
        let response = self.send(self.http_client().delete(url)).await?;
        Self::expect_success(response).await
    }

    pub async fn migrate_completions(&self) -> Result<MigrationResult, ApiError> {
        let url = self.url("/habits/migrate-completions").await;
        let response = self.send(self.http_client().post(url)).await?;
        Self::parse_json(response).await
    }
}
