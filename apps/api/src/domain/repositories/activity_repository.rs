use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::activity::Activity;

/// Repository trait for the append-only activity log
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Insert a batch of activities in the given order
    async fn insert_many(&self, activities: &[Activity]) -> Result<(), String>;

    /// Find all activities of a team, newest first
    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Activity>, String>;
}
