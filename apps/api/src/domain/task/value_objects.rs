use serde::{Deserialize, Serialize};

/// Priority of a task
///
/// High-priority work is pinned to its assignee: the reassignment engine
/// never moves or unassigns it. Low and Medium carry an eviction rank that
/// decides which tasks leave an overloaded member first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "task_priority")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Ordinal used when evicting tasks from an over-capacity member
    ///
    /// Lower ranks are evicted first. High has no rank and is never evicted.
    ///
    /// # Example
    /// ```
    /// use smart_task_api::domain::task::value_objects::TaskPriority;
    ///
    /// assert_eq!(TaskPriority::Low.eviction_rank(), Some(0));
    /// assert_eq!(TaskPriority::Medium.eviction_rank(), Some(1));
    /// assert_eq!(TaskPriority::High.eviction_rank(), None);
    /// ```
    pub fn eviction_rank(&self) -> Option<u8> {
        match self {
            TaskPriority::Low => Some(0),
            TaskPriority::Medium => Some(1),
            TaskPriority::High => None,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "Low"),
            TaskPriority::Medium => write!(f, "Medium"),
            TaskPriority::High => write!(f, "High"),
        }
    }
}

/// Workflow status of a task
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Done => write!(f, "Done"),
        }
    }
}
