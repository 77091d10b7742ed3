//! Integration tests for the rebalance service
//!
//! The service is wired to the in-memory store so the full
//! load -> plan -> apply -> record flow runs without a database.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use smart_task_api::domain::project::Project;
use smart_task_api::domain::rebalance::{RebalanceError, RebalanceService};
use smart_task_api::domain::repositories::{
    ActivityRepository, ProjectRepository, TaskRepository, TeamRepository,
};
use smart_task_api::domain::task::{Task, TaskPriority};
use smart_task_api::domain::team::{Capacity, Team};
use smart_task_api::infrastructure::repositories::InMemoryStore;
use uuid::Uuid;

struct Fixture {
    store: Arc<InMemoryStore>,
    service: RebalanceService,
    owner: Uuid,
    team: Team,
    project: Project,
}

impl Fixture {
    /// Team with members of the given capacities, one project, no tasks
    async fn new(capacities: &[i64]) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let owner = Uuid::new_v4();

        let (mut team, _) = Team::new("Delivery".to_string(), owner).unwrap();
        for (i, cap) in capacities.iter().enumerate() {
            team.add_member(format!("member-{}", i), None, Capacity::new(*cap).unwrap())
                .unwrap();
        }
        TeamRepository::save(store.as_ref(), &team).await.unwrap();

        let project = Project::new(team.id(), "Roadmap".to_string(), None).unwrap();
        ProjectRepository::save(store.as_ref(), &project).await.unwrap();

        let service = RebalanceService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        );

        Self {
            store,
            service,
            owner,
            team,
            project,
        }
    }

    fn member(&self, i: usize) -> Uuid {
        self.team.members()[i].id
    }

    async fn add_task(&self, member: usize, priority: TaskPriority, minute: i64) -> Task {
        let created = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap() + Duration::minutes(minute);
        let task = Task::new(
            self.project.id(),
            format!("task-{}", minute),
            priority,
            Some(self.member(member)),
        )
        .unwrap()
        .with_created_at(created);
        TaskRepository::save(self.store.as_ref(), &task).await.unwrap();
        task
    }

    async fn assignee(&self, task: &Task) -> Option<Uuid> {
        TaskRepository::find_by_id(self.store.as_ref(), task.id())
            .await
            .unwrap()
            .unwrap()
            .assigned_member()
    }
}

#[tokio::test]
async fn rebalance_moves_and_records_activities() {
    let fx = Fixture::new(&[3, 1, 2]).await;
    let cycle = [
        TaskPriority::High,
        TaskPriority::Medium,
        TaskPriority::Low,
        TaskPriority::High,
        TaskPriority::Medium,
        TaskPriority::Low,
    ];
    let mut alice_tasks = Vec::new();
    for (i, p) in cycle.iter().enumerate() {
        alice_tasks.push(fx.add_task(0, *p, i as i64).await);
    }
    let bob_task = fx.add_task(1, TaskPriority::Low, 20).await;

    let report = fx.service.rebalance(fx.team.id(), fx.owner).await.unwrap();

    assert_eq!(report.moved, 3);
    assert_eq!(report.details.len(), 3);
    assert_eq!(report.details[0].task_id, alice_tasks[2].id());
    assert_eq!(report.details[0].to_member, Some(fx.member(2)));
    assert_eq!(report.details[1].task_id, alice_tasks[5].id());
    assert_eq!(report.details[2].task_id, alice_tasks[1].id());
    assert!(report.details[2].to_member.is_none());
    assert!(report
        .details
        .iter()
        .all(|a| a.performed_by == fx.owner && a.team_id == fx.team.id()));

    assert_eq!(fx.assignee(&alice_tasks[2]).await, Some(fx.member(2)));
    assert_eq!(fx.assignee(&alice_tasks[5]).await, Some(fx.member(2)));
    assert_eq!(fx.assignee(&alice_tasks[1]).await, None);
    assert_eq!(fx.assignee(&alice_tasks[0]).await, Some(fx.member(0)));
    assert_eq!(fx.assignee(&alice_tasks[3]).await, Some(fx.member(0)));
    assert_eq!(fx.assignee(&bob_task).await, Some(fx.member(1)));

    // Persisted log is newest first
    let log = fx.service.activities(fx.team.id(), fx.owner).await.unwrap();
    let logged: Vec<Uuid> = log.iter().map(|a| a.task_id).collect();
    let expected: Vec<Uuid> = report.details.iter().rev().map(|a| a.task_id).collect();
    assert_eq!(logged, expected);
}

#[tokio::test]
async fn second_run_does_nothing() {
    let fx = Fixture::new(&[1, 2]).await;
    fx.add_task(0, TaskPriority::Low, 0).await;
    fx.add_task(0, TaskPriority::Low, 1).await;

    let first = fx.service.rebalance(fx.team.id(), fx.owner).await.unwrap();
    let second = fx.service.rebalance(fx.team.id(), fx.owner).await.unwrap();

    assert_eq!(first.moved, 1);
    assert_eq!(second.moved, 0);
    assert!(second.details.is_empty());

    let log = fx.service.activities(fx.team.id(), fx.owner).await.unwrap();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn team_without_projects_is_balanced() {
    let store = Arc::new(InMemoryStore::new());
    let owner = Uuid::new_v4();
    let (team, _) = Team::new("Empty".to_string(), owner).unwrap();
    TeamRepository::save(store.as_ref(), &team).await.unwrap();
    let service = RebalanceService::new(store.clone(), store.clone(), store.clone(), store);

    let report = service.rebalance(team.id(), owner).await.unwrap();

    assert_eq!(report.moved, 0);
}

#[tokio::test]
async fn unknown_team_is_rejected() {
    let fx = Fixture::new(&[1]).await;

    let err = fx.service.rebalance(Uuid::new_v4(), fx.owner).await.unwrap_err();

    assert!(matches!(err, RebalanceError::TeamNotFound(_)));
}

#[tokio::test]
async fn foreign_team_is_rejected_without_changes() {
    let fx = Fixture::new(&[0, 1]).await;
    let task = fx.add_task(0, TaskPriority::Low, 0).await;

    let err = fx
        .service
        .rebalance(fx.team.id(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, RebalanceError::NotOwner { .. }));
    assert_eq!(fx.assignee(&task).await, Some(fx.member(0)));
    assert!(fx
        .service
        .activities(fx.team.id(), Uuid::new_v4())
        .await
        .is_err());
}

/// Task repository that lets another writer grab one task right after the
/// snapshot is read
struct RacingTasks {
    inner: Arc<InMemoryStore>,
    stolen: Uuid,
    thief: Uuid,
}

#[async_trait]
impl TaskRepository for RacingTasks {
    async fn save(&self, task: &Task) -> Result<(), String> {
        TaskRepository::save(self.inner.as_ref(), task).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, String> {
        TaskRepository::find_by_id(self.inner.as_ref(), id).await
    }

    async fn find_assigned_in_projects(&self, project_ids: &[Uuid]) -> Result<Vec<Task>, String> {
        let snapshot = self.inner.find_assigned_in_projects(project_ids).await?;

        let mut task = TaskRepository::find_by_id(self.inner.as_ref(), self.stolen)
            .await?
            .ok_or("missing task")?;
        task.assign_to(self.thief);
        TaskRepository::save(self.inner.as_ref(), &task).await?;

        Ok(snapshot)
    }

    async fn reassign(
        &self,
        task_id: Uuid,
        expected_from: Uuid,
        to: Option<Uuid>,
    ) -> Result<bool, String> {
        self.inner.reassign(task_id, expected_from, to).await
    }
}

#[tokio::test]
async fn concurrent_change_stops_run_and_keeps_completed_moves() {
    let fx = Fixture::new(&[0, 3, 0]).await;
    let first = fx.add_task(0, TaskPriority::Low, 0).await;
    let second = fx.add_task(0, TaskPriority::Low, 1).await;
    let third = fx.add_task(0, TaskPriority::Medium, 2).await;

    let racing = Arc::new(RacingTasks {
        inner: fx.store.clone(),
        stolen: second.id(),
        thief: fx.member(2),
    });
    let service = RebalanceService::new(
        fx.store.clone(),
        fx.store.clone(),
        racing,
        fx.store.clone(),
    );

    let err = service.rebalance(fx.team.id(), fx.owner).await.unwrap_err();

    match err {
        RebalanceError::Conflict { task_id } => assert_eq!(task_id, second.id()),
        other => panic!("Expected conflict, got {:?}", other),
    }

    // First move was applied and logged; nothing after the conflict ran
    assert_eq!(fx.assignee(&first).await, Some(fx.member(1)));
    assert_eq!(fx.assignee(&second).await, Some(fx.member(2)));
    assert_eq!(fx.assignee(&third).await, Some(fx.member(0)));

    let log = ActivityRepository::find_by_team(fx.store.as_ref(), fx.team.id())
        .await
        .unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].task_id, first.id());
}
