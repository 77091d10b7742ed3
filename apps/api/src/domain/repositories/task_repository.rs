use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::task::Task;

/// Repository trait for tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Save a task (insert or update)
    async fn save(&self, task: &Task) -> Result<(), String>;

    /// Find a task by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, String>;

    /// Find tasks of the given projects that have an assignee
    async fn find_assigned_in_projects(&self, project_ids: &[Uuid]) -> Result<Vec<Task>, String>;

    /// Change a task's assignee if it is still assigned to `expected_from`
    ///
    /// Returns `Ok(false)` when the task is gone or its assignee changed
    /// since it was read, leaving the task untouched.
    async fn reassign(
        &self,
        task_id: Uuid,
        expected_from: Uuid,
        to: Option<Uuid>,
    ) -> Result<bool, String>;
}
