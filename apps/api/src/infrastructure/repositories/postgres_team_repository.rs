use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Capacity, Member, Team};

#[derive(FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct MemberRow {
    id: Uuid,
    team_id: Uuid,
    name: String,
    role: Option<String>,
    capacity: i16,
}

impl MemberRow {
    fn into_member(self) -> Result<Member, String> {
        let capacity = Capacity::new(i64::from(self.capacity))
            .map_err(|e| format!("Invalid capacity from database: {}", e))?;
        Ok(Member {
            id: self.id,
            name: self.name,
            role: self.role,
            capacity,
        })
    }
}

/// PostgreSQL implementation of TeamRepository
///
/// Members live in `team_members`; the `position` column keeps the member
/// list order that the reassignment engine depends on.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_members(&self, team_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Member>>, String> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, team_id, name, role, capacity
            FROM team_members
            WHERE team_id = ANY($1)
            ORDER BY team_id, position
            "#,
        )
        .bind(team_ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load team members: {}", e))?;

        let mut members: HashMap<Uuid, Vec<Member>> = HashMap::new();
        for row in rows {
            let team_id = row.team_id;
            members.entry(team_id).or_default().push(row.into_member()?);
        }
        Ok(members)
    }

    async fn hydrate(&self, rows: Vec<TeamRow>) -> Result<Vec<Team>, String> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut members = self.load_members(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let team_members = members.remove(&r.id).unwrap_or_default();
                Team::from_persistence(r.id, r.name, r.owner_id, team_members, r.created_at)
            })
            .collect())
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to save team: {}", e))?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, owner_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                owner_id = EXCLUDED.owner_id
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.owner_id())
        .bind(team.created_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        sqlx::query("DELETE FROM team_members WHERE team_id = $1")
            .bind(team.id())
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to save team members: {}", e))?;

        for (position, member) in team.members().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO team_members (id, team_id, name, role, capacity, position)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(member.id)
            .bind(team.id())
            .bind(&member.name)
            .bind(&member.role)
            .bind(member.capacity.value() as i16)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to save team members: {}", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to save team: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, owner_id, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, owner_id, created_at
            FROM teams
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find teams by owner: {}", e))?;

        self.hydrate(rows).await
    }
}
