use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::task::Task;
use crate::domain::team::Member;

/// Per-member load derived at the start of a reassignment run
///
/// `available` is `max(0, capacity - assigned)` at build time. During a run
/// it only decreases: receiving a task consumes a slot, evicting a task
/// from an overloaded member does not open one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityRecord {
    pub member_id: Uuid,
    pub capacity: usize,
    pub assigned: usize,
    pub available: usize,
}

impl CapacityRecord {
    /// Returns true if the member holds more tasks than its capacity
    pub fn is_over_capacity(&self) -> bool {
        self.assigned > self.capacity
    }

    /// Number of tasks above capacity, zero when within bounds
    pub fn overflow(&self) -> usize {
        self.assigned.saturating_sub(self.capacity)
    }
}

/// Capacity records for every member of a team, in member-list order
///
/// Owned by a single run and updated after every move so that each target
/// selection sees the effect of the previous ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacitySnapshot {
    records: Vec<CapacityRecord>,
    index: HashMap<Uuid, usize>,
}

impl CapacitySnapshot {
    /// Builds one record per member from the tasks currently assigned
    ///
    /// Members without tasks get `assigned = 0`. Tasks pointing at ids that
    /// are not members of the team are ignored.
    ///
    /// # Example
    /// ```
    /// use smart_task_api::domain::rebalance::CapacitySnapshot;
    /// use smart_task_api::domain::task::{Task, TaskPriority};
    /// use smart_task_api::domain::team::{Capacity, Member};
    /// use uuid::Uuid;
    ///
    /// let alice = Member::new("Alice", None, Capacity::new(1).unwrap());
    /// let task = Task::new(Uuid::new_v4(), "t".into(), TaskPriority::Low, Some(alice.id)).unwrap();
    ///
    /// let snapshot = CapacitySnapshot::build(&[alice.clone()], &[task]);
    /// let record = snapshot.record(alice.id).unwrap();
    /// assert_eq!(record.assigned, 1);
    /// assert_eq!(record.available, 0);
    /// ```
    pub fn build(members: &[Member], tasks: &[Task]) -> Self {
        let mut assigned: HashMap<Uuid, usize> = HashMap::new();
        for member_id in tasks.iter().filter_map(Task::assigned_member) {
            *assigned.entry(member_id).or_insert(0) += 1;
        }

        let mut records = Vec::with_capacity(members.len());
        let mut index = HashMap::with_capacity(members.len());
        for member in members {
            let capacity = member.capacity.value();
            let count = assigned.get(&member.id).copied().unwrap_or(0);
            index.insert(member.id, records.len());
            records.push(CapacityRecord {
                member_id: member.id,
                capacity,
                assigned: count,
                available: capacity.saturating_sub(count),
            });
        }

        Self { records, index }
    }

    /// Returns all records in member-list order
    pub fn records(&self) -> &[CapacityRecord] {
        &self.records
    }

    /// Looks up the record of a member
    pub fn record(&self, member_id: Uuid) -> Option<&CapacityRecord> {
        self.index.get(&member_id).map(|&i| &self.records[i])
    }

    /// Members whose assigned count exceeds capacity, in member-list order
    pub fn over_capacity(&self) -> Vec<Uuid> {
        self.records
            .iter()
            .filter(|r| r.is_over_capacity())
            .map(|r| r.member_id)
            .collect()
    }

    /// Member with the most spare capacity, or `None` if nobody has any
    ///
    /// Ties go to the member that comes first in the team's list.
    pub fn select_target(&self) -> Option<Uuid> {
        let mut best: Option<&CapacityRecord> = None;
        for record in self.records.iter().filter(|r| r.available > 0) {
            match best {
                Some(current) if current.available >= record.available => {}
                _ => best = Some(record),
            }
        }
        best.map(|r| r.member_id)
    }

    /// Applies a move of one task from `from` to `to`
    pub fn record_move(&mut self, from: Uuid, to: Uuid) {
        if let Some(source) = self.record_mut(from) {
            source.assigned = source.assigned.saturating_sub(1);
        }
        if let Some(target) = self.record_mut(to) {
            target.assigned += 1;
            target.available = target.available.saturating_sub(1);
        }
    }

    /// Applies the unassignment of one task held by `from`
    pub fn record_unassign(&mut self, from: Uuid) {
        if let Some(source) = self.record_mut(from) {
            source.assigned = source.assigned.saturating_sub(1);
        }
    }

    /// Sum of assigned counts across all members
    pub fn total_assigned(&self) -> usize {
        self.records.iter().map(|r| r.assigned).sum()
    }

    fn record_mut(&mut self, member_id: Uuid) -> Option<&mut CapacityRecord> {
        let i = *self.index.get(&member_id)?;
        self.records.get_mut(i)
    }
}
