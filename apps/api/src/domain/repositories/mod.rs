// Repository contracts (ports)
// Implemented by adapters in the infrastructure layer

pub mod activity_repository;
pub mod project_repository;
pub mod task_repository;
pub mod team_repository;

pub use activity_repository::ActivityRepository;
pub use project_repository::ProjectRepository;
pub use task_repository::TaskRepository;
pub use team_repository::TeamRepository;
