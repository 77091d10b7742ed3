use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::engine::{Rebalancer, Reassignment};
use super::errors::{RebalanceError, RebalanceResult};
use super::recorder::ActivityRecorder;
use crate::domain::activity::Activity;
use crate::domain::repositories::{
    ActivityRepository, ProjectRepository, TaskRepository, TeamRepository,
};
use crate::domain::team::Team;

/// Outcome of a reassignment run
#[derive(Debug, Clone, Serialize)]
pub struct RebalanceReport {
    /// Number of tasks reassigned or unassigned
    pub moved: usize,
    /// Audit entries in the order the moves were applied
    pub details: Vec<Activity>,
}

/// Runs the reassignment engine against stored teams and tasks
///
/// Loads a snapshot, plans the moves, then applies them one task at a time.
/// Each task update is conditional on the task still having the assignee
/// the snapshot saw; the first mismatch stops the run with
/// [`RebalanceError::Conflict`]. Applied moves are not rolled back.
///
/// Callers that cannot tolerate a conflict error should serialize runs per
/// team.
#[derive(Clone)]
pub struct RebalanceService {
    teams: Arc<dyn TeamRepository>,
    projects: Arc<dyn ProjectRepository>,
    tasks: Arc<dyn TaskRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl RebalanceService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        projects: Arc<dyn ProjectRepository>,
        tasks: Arc<dyn TaskRepository>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            teams,
            projects,
            tasks,
            activities,
        }
    }

    /// Restores every member of the team to within capacity
    ///
    /// # Arguments
    /// * `team_id` - Team to rebalance
    /// * `caller` - Authenticated user; must own the team
    ///
    /// # Returns
    /// * `Ok(RebalanceReport)` - Applied moves and their audit entries
    /// * `Err(RebalanceError)` - Unknown team, foreign team, conflict or storage failure
    pub async fn rebalance(&self, team_id: Uuid, caller: Uuid) -> RebalanceResult<RebalanceReport> {
        let team = self.owned_team(team_id, caller).await?;

        let project_ids: Vec<Uuid> = self
            .projects
            .find_by_team(team.id())
            .await
            .map_err(RebalanceError::Storage)?
            .iter()
            .map(|p| p.id())
            .collect();

        let tasks = if project_ids.is_empty() {
            Vec::new()
        } else {
            self.tasks
                .find_assigned_in_projects(&project_ids)
                .await
                .map_err(RebalanceError::Storage)?
        };

        let plan = Rebalancer::plan(team.members(), &tasks);
        tracing::debug!(
            team_id = %team.id(),
            tasks = tasks.len(),
            planned = plan.moves.len(),
            "reassignment planned"
        );

        let mut recorder = ActivityRecorder::new(team.id(), caller);
        for mv in &plan.moves {
            if let Err(err) = self.apply_move(mv).await {
                self.flush_partial(&recorder).await;
                return Err(err);
            }
            recorder.record(mv);
        }

        let details = recorder.into_entries();
        if !details.is_empty() {
            self.activities
                .insert_many(&details)
                .await
                .map_err(RebalanceError::Storage)?;
        }

        tracing::info!(
            team_id = %team.id(),
            moved = details.len(),
            unassigned = details.iter().filter(|a| a.is_unassignment()).count(),
            "team tasks rebalanced"
        );

        Ok(RebalanceReport {
            moved: details.len(),
            details,
        })
    }

    /// Returns the team's activity log, newest first
    pub async fn activities(&self, team_id: Uuid, caller: Uuid) -> RebalanceResult<Vec<Activity>> {
        let team = self.owned_team(team_id, caller).await?;

        self.activities
            .find_by_team(team.id())
            .await
            .map_err(RebalanceError::Storage)
    }

    async fn owned_team(&self, team_id: Uuid, caller: Uuid) -> RebalanceResult<Team> {
        let team = self
            .teams
            .find_by_id(team_id)
            .await
            .map_err(RebalanceError::Storage)?
            .ok_or(RebalanceError::TeamNotFound(team_id))?;

        if !team.is_owned_by(caller) {
            return Err(RebalanceError::NotOwner {
                team_id,
                user_id: caller,
            });
        }

        Ok(team)
    }

    async fn apply_move(&self, mv: &Reassignment) -> RebalanceResult<()> {
        let applied = self
            .tasks
            .reassign(mv.task_id, mv.from_member, mv.to_member)
            .await
            .map_err(RebalanceError::Storage)?;

        if !applied {
            tracing::warn!(
                task_id = %mv.task_id,
                expected_from = %mv.from_member,
                "task changed since snapshot, stopping reassignment"
            );
            return Err(RebalanceError::Conflict {
                task_id: mv.task_id,
            });
        }

        Ok(())
    }

    /// Persists entries of moves applied before a failure
    async fn flush_partial(&self, recorder: &ActivityRecorder) {
        if recorder.is_empty() {
            return;
        }
        if let Err(e) = self.activities.insert_many(recorder.entries()).await {
            tracing::error!(
                error = %e,
                entries = recorder.len(),
                "failed to persist activities of a partial reassignment run"
            );
        }
    }
}
