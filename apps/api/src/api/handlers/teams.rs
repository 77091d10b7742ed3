use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::activity::Activity;
use crate::domain::rebalance::RebalanceReport;

/// One audit entry as returned by the API
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub team: Uuid,
    pub performed_by: Uuid,
    pub task: Uuid,
    pub from_member: Uuid,
    pub to_member: Option<Uuid>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Activity> for ActivityResponse {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id,
            team: a.team_id,
            performed_by: a.performed_by,
            task: a.task_id,
            from_member: a.from_member,
            to_member: a.to_member,
            message: a.message.clone(),
            created_at: a.created_at,
        }
    }
}

/// Summary of a reassignment run
#[derive(Debug, Serialize)]
pub struct ReassignResponse {
    pub moved: usize,
    pub details: Vec<ActivityResponse>,
}

impl From<RebalanceReport> for ReassignResponse {
    fn from(report: RebalanceReport) -> Self {
        Self {
            moved: report.moved,
            details: report.details.iter().map(ActivityResponse::from).collect(),
        }
    }
}

/// Reassign tasks of a team according to member capacities
///
/// POST /api/teams/:id/reassign
pub async fn reassign_tasks(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<ReassignResponse>, ApiError> {
    let report = state.rebalance.rebalance(id, user_id).await?;

    Ok(Json(ReassignResponse::from(report)))
}

/// List a team's reassignment activity, newest first
///
/// GET /api/teams/:id/activities
pub async fn list_activities(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let activities = state.rebalance.activities(id, user_id).await?;

    Ok(Json(activities.iter().map(ActivityResponse::from).collect()))
}
