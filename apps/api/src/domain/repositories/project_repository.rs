use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::project::Project;

/// Repository trait for projects
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a project (insert or update)
    async fn save(&self, project: &Project) -> Result<(), String>;

    /// Find all projects of a team
    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Project>, String>;
}
