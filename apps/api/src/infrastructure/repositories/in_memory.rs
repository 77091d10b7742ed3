use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::activity::Activity;
use crate::domain::project::Project;
use crate::domain::repositories::{
    ActivityRepository, ProjectRepository, TaskRepository, TeamRepository,
};
use crate::domain::task::Task;
use crate::domain::team::Team;

/// Process-local store implementing every repository trait
///
/// Used for local development without PostgreSQL (`USE_INMEM_DB=true`) and
/// by tests. Tasks and activities keep insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    teams: RwLock<HashMap<Uuid, Team>>,
    projects: RwLock<Vec<Project>>,
    tasks: RwLock<Vec<Task>>,
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, String> {
    lock.read().map_err(|_| "In-memory store lock poisoned".to_string())
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, String> {
    lock.write().map_err(|_| "In-memory store lock poisoned".to_string())
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &Team) -> Result<(), String> {
        write(&self.teams)?.insert(team.id(), team.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(read(&self.teams)?.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String> {
        let mut teams: Vec<Team> = read(&self.teams)?
            .values()
            .filter(|t| t.is_owned_by(owner_id))
            .cloned()
            .collect();
        teams.sort_by_key(|t| std::cmp::Reverse(t.created_at()));
        Ok(teams)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn save(&self, project: &Project) -> Result<(), String> {
        let mut projects = write(&self.projects)?;
        match projects.iter_mut().find(|p| p.id() == project.id()) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        Ok(())
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Project>, String> {
        Ok(read(&self.projects)?
            .iter()
            .filter(|p| p.team_id() == team_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn save(&self, task: &Task) -> Result<(), String> {
        let mut tasks = write(&self.tasks)?;
        match tasks.iter_mut().find(|t| t.id() == task.id()) {
            Some(existing) => *existing = task.clone(),
            None => tasks.push(task.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, String> {
        Ok(read(&self.tasks)?.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_assigned_in_projects(&self, project_ids: &[Uuid]) -> Result<Vec<Task>, String> {
        Ok(read(&self.tasks)?
            .iter()
            .filter(|t| t.assigned_member().is_some() && project_ids.contains(&t.project_id()))
            .cloned()
            .collect())
    }

    async fn reassign(
        &self,
        task_id: Uuid,
        expected_from: Uuid,
        to: Option<Uuid>,
    ) -> Result<bool, String> {
        let mut tasks = write(&self.tasks)?;
        let Some(task) = tasks.iter_mut().find(|t| t.id() == task_id) else {
            return Ok(false);
        };
        if task.assigned_member() != Some(expected_from) {
            return Ok(false);
        }

        match to {
            Some(member_id) => task.assign_to(member_id),
            None => task.unassign(),
        }
        Ok(true)
    }
}

#[async_trait]
impl ActivityRepository for InMemoryStore {
    async fn insert_many(&self, activities: &[Activity]) -> Result<(), String> {
        write(&self.activities)?.extend_from_slice(activities);
        Ok(())
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Activity>, String> {
        Ok(read(&self.activities)?
            .iter()
            .rev()
            .filter(|a| a.team_id == team_id)
            .cloned()
            .collect())
    }
}
