use thiserror::Error;
use uuid::Uuid;

/// Errors that can stop a reassignment run
///
/// Planning itself cannot fail; every variant comes from the checks before
/// the run or from applying its moves to storage.
#[derive(Debug, Error)]
pub enum RebalanceError {
    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    #[error("Team {team_id} is not owned by user {user_id}")]
    NotOwner { team_id: Uuid, user_id: Uuid },

    #[error("Task {task_id} was modified concurrently; reassignment stopped")]
    Conflict { task_id: Uuid },

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type RebalanceResult<T> = Result<T, RebalanceError>;
