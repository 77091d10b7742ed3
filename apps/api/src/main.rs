use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};

use smart_task_api::api::{self, AppState};
use smart_task_api::config::AppConfig;
use smart_task_api::infrastructure::repositories::InMemoryStore;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let state = if config.use_in_memory_db {
        tracing::info!("Using in-memory store");
        AppState::in_memory(Arc::new(InMemoryStore::new()), &config.jwt_secret)
    } else {
        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .expect("Failed to connect to database");

        tracing::info!("Database connected successfully");
        AppState::postgres(pool, &config.jwt_secret)
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state).layer(cors);

    let addr = config.listen_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
