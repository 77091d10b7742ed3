use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::project::Project;
use crate::domain::repositories::ProjectRepository;

#[derive(FromRow)]
struct ProjectRow {
    id: Uuid,
    team_id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

/// PostgreSQL implementation of ProjectRepository
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new PostgresProjectRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, team_id, name, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description
            "#,
        )
        .bind(project.id())
        .bind(project.team_id())
        .bind(project.name())
        .bind(project.description())
        .bind(project.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save project: {}", e))?;

        Ok(())
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Project>, String> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, team_id, name, description, created_at
            FROM projects
            WHERE team_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find projects by team: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| Project::from_persistence(r.id, r.team_id, r.name, r.description, r.created_at))
            .collect())
    }
}
