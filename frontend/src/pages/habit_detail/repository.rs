use crate::api::{ApiClient, ApiError};
use futures::future::try_join;
use std::rc::Rc;

use super::utils::HabitDetail;

#[derive(Clone)]
pub struct HabitDetailRepository {
    client: Rc<ApiClient>,
}

impl Default for HabitDetailRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitDetailRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Habit and statistics are requested together; either failure fails both.
    pub async fn fetch_detail(&self, habit_id: &str) -> Result<HabitDetail, ApiError> {
        let (habit, stats) = try_join(
            self.client.get_habit(habit_id),
            self.client.get_habit_stats(habit_id),
        )
        .await?;
        Ok(HabitDetail { habit, stats })
    }

    pub async fn delete_habit(&self, habit_id: &str) -> Result<(), ApiError> {
        self.client.delete_habit(habit_id).await
    }
}
