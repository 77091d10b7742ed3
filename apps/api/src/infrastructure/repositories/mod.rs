// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_activity_repository;
pub mod postgres_project_repository;
pub mod postgres_task_repository;
pub mod postgres_team_repository;

pub use in_memory::InMemoryStore;
pub use postgres_activity_repository::PostgresActivityRepository;
pub use postgres_project_repository::PostgresProjectRepository;
pub use postgres_task_repository::PostgresTaskRepository;
pub use postgres_team_repository::PostgresTeamRepository;
