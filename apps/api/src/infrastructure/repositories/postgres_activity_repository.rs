use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::activity::Activity;
use crate::domain::repositories::ActivityRepository;

#[derive(FromRow)]
struct ActivityRow {
    id: Uuid,
    team_id: Uuid,
    performed_by: Uuid,
    task_id: Uuid,
    from_member: Uuid,
    to_member: Option<Uuid>,
    message: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL implementation of ActivityRepository
///
/// Rows are insert-only; `seq` preserves insertion order among entries that
/// share a timestamp.
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    /// Creates a new PostgresActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn insert_many(&self, activities: &[Activity]) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to insert activities: {}", e))?;

        for a in activities {
            sqlx::query(
                r#"
                INSERT INTO activities (
                    id, team_id, performed_by, task_id,
                    from_member, to_member, message, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(a.id)
            .bind(a.team_id)
            .bind(a.performed_by)
            .bind(a.task_id)
            .bind(a.from_member)
            .bind(a.to_member)
            .bind(&a.message)
            .bind(a.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to insert activities: {}", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to insert activities: {}", e))?;

        Ok(())
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Activity>, String> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, team_id, performed_by, task_id,
                   from_member, to_member, message, created_at
            FROM activities
            WHERE team_id = $1
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find activities by team: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| Activity {
                id: r.id,
                team_id: r.team_id,
                performed_by: r.performed_by,
                task_id: r.task_id,
                from_member: r.from_member,
                to_member: r.to_member,
                message: r.message,
                created_at: r.created_at,
            })
            .collect())
    }
}
