use super::value_objects::{TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A unit of work inside a project, optionally assigned to a team member
///
/// # Invariants
/// - Title cannot be empty
/// - `updated_at` never precedes `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: Uuid,
    project_id: Uuid,
    title: String,
    description: Option<String>,
    assigned_member: Option<Uuid>,
    priority: TaskPriority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task
    ///
    /// # Returns
    /// * `Ok(Task)` - New task
    /// * `Err(String)` - If the title is empty
    ///
    /// # Example
    /// ```
    /// use smart_task_api::domain::task::Task;
    /// use smart_task_api::domain::task::value_objects::TaskPriority;
    /// use uuid::Uuid;
    ///
    /// let task = Task::new(Uuid::new_v4(), "Write docs".to_string(), TaskPriority::Low, None)
    ///     .expect("valid task");
    /// assert!(task.assigned_member().is_none());
    /// ```
    pub fn new(
        project_id: Uuid,
        title: String,
        priority: TaskPriority,
        assigned_member: Option<Uuid>,
    ) -> Result<Self, String> {
        if title.trim().is_empty() {
            return Err("Task title required".to_string());
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            description: None,
            assigned_member,
            priority,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Overrides the creation timestamp (builder style)
    ///
    /// Creation time is the tie-break when evicting tasks, so imports and
    /// fixtures need to control it.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        if self.updated_at < created_at {
            self.updated_at = created_at;
        }
        self
    }

    /// Assigns the task to a member
    pub fn assign_to(&mut self, member_id: Uuid) {
        self.assigned_member = Some(member_id);
        self.touch();
    }

    /// Clears the assignment
    pub fn unassign(&mut self) {
        self.assigned_member = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn assigned_member(&self) -> Option<Uuid> {
        self.assigned_member
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Task from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        project_id: Uuid,
        title: String,
        description: Option<String>,
        assigned_member: Option<Uuid>,
        priority: TaskPriority,
        status: TaskStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            project_id,
            title,
            description,
            assigned_member,
            priority,
            status,
            created_at,
            updated_at,
        }
    }
}
