use uuid::Uuid;

use super::engine::Reassignment;
use crate::domain::activity::Activity;

/// Collects one audit entry per applied move, in application order
///
/// Entries are handed to the activity repository as a single batch once
/// the run is over.
#[derive(Debug)]
pub struct ActivityRecorder {
    team_id: Uuid,
    performed_by: Uuid,
    entries: Vec<Activity>,
}

impl ActivityRecorder {
    pub fn new(team_id: Uuid, performed_by: Uuid) -> Self {
        Self {
            team_id,
            performed_by,
            entries: Vec::new(),
        }
    }

    /// Appends the entry matching an applied move and returns it
    pub fn record(&mut self, mv: &Reassignment) -> &Activity {
        let activity = match mv.to_member {
            Some(to) => Activity::reassigned(
                self.team_id,
                self.performed_by,
                mv.task_id,
                mv.from_member,
                to,
            ),
            None => Activity::unassigned(self.team_id, self.performed_by, mv.task_id, mv.from_member),
        };
        self.entries.push(activity);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Activity> {
        self.entries
    }
}
