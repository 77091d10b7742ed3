use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::repositories::TaskRepository;
use crate::domain::task::{Task, TaskPriority, TaskStatus};

#[derive(FromRow)]
struct TaskRow {
    id: Uuid,
    project_id: Uuid,
    title: String,
    description: Option<String>,
    assigned_member: Option<Uuid>,
    priority: TaskPriority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(r: TaskRow) -> Self {
        Task::from_persistence(
            r.id,
            r.project_id,
            r.title,
            r.description,
            r.assigned_member,
            r.priority,
            r.status,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL implementation of TaskRepository
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new PostgresTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO tasks (
                id, project_id, title, description, assigned_member,
                priority, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                assigned_member = EXCLUDED.assigned_member,
                priority = EXCLUDED.priority,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(task.id())
        .bind(task.project_id())
        .bind(task.title())
        .bind(task.description())
        .bind(task.assigned_member())
        .bind(task.priority())
        .bind(task.status())
        .bind(task.created_at())
        .bind(task.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save task: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, String> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, project_id, title, description, assigned_member,
                   priority, status, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find task by id: {}", e))?;

        Ok(row.map(Task::from))
    }

    async fn find_assigned_in_projects(&self, project_ids: &[Uuid]) -> Result<Vec<Task>, String> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, project_id, title, description, assigned_member,
                   priority, status, created_at, updated_at
            FROM tasks
            WHERE project_id = ANY($1)
              AND assigned_member IS NOT NULL
            ORDER BY created_at, id
            "#,
        )
        .bind(project_ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find assigned tasks: {}", e))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn reassign(
        &self,
        task_id: Uuid,
        expected_from: Uuid,
        to: Option<Uuid>,
    ) -> Result<bool, String> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET assigned_member = $3, updated_at = NOW()
            WHERE id = $1 AND assigned_member = $2
            "#,
        )
        .bind(task_id)
        .bind(expected_from)
        .bind(to)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to reassign task: {}", e))?;

        Ok(result.rows_affected() == 1)
    }
}
