use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::rebalance::RebalanceService;
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresActivityRepository, PostgresProjectRepository,
    PostgresTaskRepository, PostgresTeamRepository,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub rebalance: RebalanceService,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    /// State backed by PostgreSQL repositories
    pub fn postgres(pool: PgPool, jwt_secret: &str) -> Self {
        Self {
            rebalance: RebalanceService::new(
                Arc::new(PostgresTeamRepository::new(pool.clone())),
                Arc::new(PostgresProjectRepository::new(pool.clone())),
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresActivityRepository::new(pool)),
            ),
            jwt_secret: Arc::from(jwt_secret),
        }
    }

    /// State backed by a shared in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>, jwt_secret: &str) -> Self {
        Self {
            rebalance: RebalanceService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store,
            ),
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}
