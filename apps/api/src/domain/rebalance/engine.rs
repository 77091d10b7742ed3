use serde::Serialize;
use uuid::Uuid;

use super::candidates::eviction_order;
use super::snapshot::CapacitySnapshot;
use crate::domain::task::Task;
use crate::domain::team::Member;

/// One assignment change decided by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reassignment {
    pub task_id: Uuid,
    pub from_member: Uuid,
    /// `None` means the task is unassigned
    pub to_member: Option<Uuid>,
}

impl Reassignment {
    /// Returns true if the task leaves the team's assignments entirely
    pub fn is_unassignment(&self) -> bool {
        self.to_member.is_none()
    }

    /// Applies the change to an in-memory task
    pub fn apply(&self, task: &mut Task) {
        match self.to_member {
            Some(to) => task.assign_to(to),
            None => task.unassign(),
        }
    }
}

/// Result of a planning pass
#[derive(Debug, Clone)]
pub struct RebalancePlan {
    /// Changes in the order they were decided and must be applied
    pub moves: Vec<Reassignment>,
    /// Capacity state after every move has been applied
    pub snapshot: CapacitySnapshot,
}

impl RebalancePlan {
    /// Returns true if nothing needs to change
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Applies every move to the matching tasks in `tasks`
    pub fn apply(&self, tasks: &mut [Task]) {
        for mv in &self.moves {
            if let Some(task) = tasks.iter_mut().find(|t| t.id() == mv.task_id) {
                mv.apply(task);
            }
        }
    }
}

/// Greedy capacity rebalancer
///
/// Drains over-capacity members one at a time in member-list order. For each
/// member, movable tasks leave in eviction order (Low before Medium, oldest
/// first) and go to whoever has the most spare capacity at that moment, or
/// are unassigned when nobody has any. High-priority tasks are never touched,
/// so a member overloaded with High work stays over capacity.
///
/// The result is deterministic but not globally optimal: each member is
/// drained without looking ahead at members processed later.
///
/// # Example
/// ```
/// use smart_task_api::domain::rebalance::Rebalancer;
/// use smart_task_api::domain::task::{Task, TaskPriority};
/// use smart_task_api::domain::team::{Capacity, Member};
/// use uuid::Uuid;
///
/// let alice = Member::new("Alice", None, Capacity::new(0).unwrap());
/// let bob = Member::new("Bob", None, Capacity::new(1).unwrap());
/// let task = Task::new(Uuid::new_v4(), "t".into(), TaskPriority::Low, Some(alice.id)).unwrap();
///
/// let plan = Rebalancer::plan(&[alice.clone(), bob.clone()], &[task]);
/// assert_eq!(plan.moves.len(), 1);
/// assert_eq!(plan.moves[0].to_member, Some(bob.id));
/// ```
pub struct Rebalancer;

impl Rebalancer {
    /// Decides every move needed to bring members back within capacity
    ///
    /// `tasks` should hold the tasks currently assigned to members of the
    /// team; unassigned tasks and tasks of non-members are ignored.
    pub fn plan(members: &[Member], tasks: &[Task]) -> RebalancePlan {
        let mut snapshot = CapacitySnapshot::build(members, tasks);
        let mut moves = Vec::new();

        for member_id in snapshot.over_capacity() {
            let mut overflow = snapshot
                .record(member_id)
                .map(|r| r.overflow())
                .unwrap_or(0);
            let mut candidates = eviction_order(member_id, tasks).into_iter();

            while overflow > 0 {
                let Some(task) = candidates.next() else {
                    tracing::debug!(
                        member_id = %member_id,
                        overflow,
                        "member remains over capacity with only high-priority tasks left"
                    );
                    break;
                };

                let to_member = snapshot.select_target();
                match to_member {
                    Some(target) => snapshot.record_move(member_id, target),
                    None => snapshot.record_unassign(member_id),
                }
                overflow -= 1;

                tracing::debug!(
                    task_id = %task.id(),
                    from = %member_id,
                    to = ?to_member,
                    "planned task move"
                );

                moves.push(Reassignment {
                    task_id: task.id(),
                    from_member: member_id,
                    to_member,
                });
            }
        }

        RebalancePlan { moves, snapshot }
    }
}
