//! End-to-end API integration tests
//!
//! These tests drive the HTTP router with in-memory state:
//! - Health check
//! - JWT authentication on protected endpoints
//! - Task reassignment and the activity log

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use smart_task_api::api::{self, AppState};
use smart_task_api::auth::jwt::create_token;
use smart_task_api::domain::project::Project;
use smart_task_api::domain::repositories::{ProjectRepository, TaskRepository, TeamRepository};
use smart_task_api::domain::task::{Task, TaskPriority};
use smart_task_api::domain::team::{Capacity, Team};
use smart_task_api::infrastructure::repositories::InMemoryStore;
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;

const SECRET: &str = "api-test-secret";

/// Setup test application backed by a fresh store
fn setup_app(store: Arc<InMemoryStore>) -> Router {
    api::router(AppState::in_memory(store, SECRET))
}

/// Seed a team with an overloaded first member and a free second one
async fn seed_overloaded_team(store: &InMemoryStore, owner: Uuid) -> (Team, Vec<Task>) {
    let (mut team, _) = Team::new("API team".to_string(), owner).unwrap();
    team.add_member("Alice".to_string(), None, Capacity::new(1).unwrap())
        .unwrap();
    team.add_member("Bob".to_string(), Some("dev".to_string()), Capacity::new(1).unwrap())
        .unwrap();
    TeamRepository::save(store, &team).await.unwrap();

    let project = Project::new(team.id(), "API project".to_string(), None).unwrap();
    ProjectRepository::save(store, &project).await.unwrap();

    let alice = team.members()[0].id;
    let mut tasks = Vec::new();
    for (title, priority) in [
        ("keep", TaskPriority::High),
        ("move", TaskPriority::Low),
        ("drop", TaskPriority::Medium),
    ] {
        let task = Task::new(project.id(), title.to_string(), priority, Some(alice)).unwrap();
        TaskRepository::save(store, &task).await.unwrap();
        tasks.push(task);
    }

    (team, tasks)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_reassign(team_id: Uuid, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("/api/teams/{}/reassign", team_id));
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app(Arc::new(InMemoryStore::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_reassign_requires_token() {
    let app = setup_app(Arc::new(InMemoryStore::new()));

    let response = app.oneshot(post_reassign(Uuid::new_v4(), None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No token provided");
}

#[tokio::test]
async fn test_reassign_rejects_bad_token() {
    let app = setup_app(Arc::new(InMemoryStore::new()));
    let forged = create_token(Uuid::new_v4(), "other-secret").unwrap();

    let response = app
        .oneshot(post_reassign(Uuid::new_v4(), Some(&forged)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reassign_invalid_team_id() {
    let app = setup_app(Arc::new(InMemoryStore::new()));
    let token = create_token(Uuid::new_v4(), SECRET).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/teams/not-a-uuid/reassign")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reassign_unknown_team() {
    let app = setup_app(Arc::new(InMemoryStore::new()));
    let token = create_token(Uuid::new_v4(), SECRET).unwrap();

    let response = app
        .oneshot(post_reassign(Uuid::new_v4(), Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reassign_team_owned_by_someone_else() {
    let store = Arc::new(InMemoryStore::new());
    let (team, _) = seed_overloaded_team(&store, Uuid::new_v4()).await;
    let app = setup_app(store);
    let intruder = create_token(Uuid::new_v4(), SECRET).unwrap();

    let response = app
        .oneshot(post_reassign(team.id(), Some(&intruder)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Team not found or not owned");
}

#[tokio::test]
async fn test_reassign_flow() {
    let store = Arc::new(InMemoryStore::new());
    let owner = Uuid::new_v4();
    let (team, tasks) = seed_overloaded_team(&store, owner).await;
    let bob = team.members()[1].id;
    let app = setup_app(store.clone());
    let token = create_token(owner, SECRET).unwrap();

    let response = app
        .clone()
        .oneshot(post_reassign(team.id(), Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["moved"], 2);

    let details = json["details"].as_array().unwrap();
    assert_eq!(details[0]["task"], tasks[1].id().to_string());
    assert_eq!(details[0]["to_member"], bob.to_string());
    assert_eq!(details[1]["task"], tasks[2].id().to_string());
    assert!(details[1]["to_member"].is_null());
    assert_eq!(
        details[1]["message"],
        format!("Auto-unassigned task {} due to capacity limits", tasks[2].id())
    );

    // High task stays with Alice
    let kept = TaskRepository::find_by_id(store.as_ref(), tasks[0].id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.assigned_member(), Some(team.members()[0].id));

    // Activity log is readable afterwards
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/teams/{}/activities", team.id()))
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let log = body_json(response).await;
    assert_eq!(log.as_array().unwrap().len(), 2);

    // Running again is a no-op
    let response = app
        .oneshot(post_reassign(team.id(), Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["moved"], 0);
    assert!(json["details"].as_array().unwrap().is_empty());
}
