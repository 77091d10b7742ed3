// Activity domain module
// Immutable audit entries written by reassignment runs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Audit record of a single task moved off an over-capacity member
///
/// Activities are append-only: nothing in the system mutates or deletes
/// them once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: Uuid,
    pub team_id: Uuid,
    pub performed_by: Uuid,
    pub task_id: Uuid,
    pub from_member: Uuid,
    /// `None` when the task was unassigned instead of moved
    pub to_member: Option<Uuid>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Records a task moved from one member to another
    ///
    /// # Example
    /// ```
    /// use smart_task_api::domain::activity::Activity;
    /// use uuid::Uuid;
    ///
    /// let activity = Activity::reassigned(
    ///     Uuid::new_v4(),
    ///     Uuid::new_v4(),
    ///     Uuid::new_v4(),
    ///     Uuid::new_v4(),
    ///     Uuid::new_v4(),
    /// );
    /// assert!(activity.message.starts_with("Auto-reassigned task"));
    /// assert!(activity.to_member.is_some());
    /// ```
    pub fn reassigned(
        team_id: Uuid,
        performed_by: Uuid,
        task_id: Uuid,
        from_member: Uuid,
        to_member: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            performed_by,
            task_id,
            from_member,
            to_member: Some(to_member),
            message: format!(
                "Auto-reassigned task {} from {} to {}",
                task_id, from_member, to_member
            ),
            created_at: Utc::now(),
        }
    }

    /// Records a task dropped because no member had spare capacity
    pub fn unassigned(team_id: Uuid, performed_by: Uuid, task_id: Uuid, from_member: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            performed_by,
            task_id,
            from_member,
            to_member: None,
            message: format!("Auto-unassigned task {} due to capacity limits", task_id),
            created_at: Utc::now(),
        }
    }

    /// Returns true if this entry records an unassignment
    pub fn is_unassignment(&self) -> bool {
        self.to_member.is_none()
    }
}
