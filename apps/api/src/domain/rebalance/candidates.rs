use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::task::Task;

/// Sort key of a movable task: eviction rank first, then age
///
/// `None` for High-priority tasks, which never leave their assignee.
pub fn eviction_key(task: &Task) -> Option<(u8, DateTime<Utc>)> {
    task.priority()
        .eviction_rank()
        .map(|rank| (rank, task.created_at()))
}

/// Tasks of `member_id` that may be moved, in the order they should leave
///
/// Low before Medium, oldest first within a priority. The sort is stable,
/// so tasks with identical priority and timestamp keep their input order.
pub fn eviction_order(member_id: Uuid, tasks: &[Task]) -> Vec<&Task> {
    let mut candidates: Vec<(&Task, (u8, DateTime<Utc>))> = tasks
        .iter()
        .filter(|t| t.assigned_member() == Some(member_id))
        .filter_map(|t| eviction_key(t).map(|key| (t, key)))
        .collect();

    candidates.sort_by_key(|(_, key)| *key);
    candidates.into_iter().map(|(t, _)| t).collect()
}
