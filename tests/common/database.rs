//! Database and server fixtures
//!
//! Every fixture opens its own `sqlite::memory:` database with migrations
//! applied, so tests never share rows.

use axum_test::TestServer;
use sqlx::SqlitePool;

use pizza_delivery::backend::routes::create_router;
use pizza_delivery::backend::server::config::connect_database;
use pizza_delivery::backend::server::{create_state_with_pool, AppState};
use pizza_delivery::shared::AppConfig;

/// Configuration used by every test: in-memory store, cheap bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret("integration-test-secret")
        .password_hash_cost(4)
        .build()
        .expect("Failed to build test configuration")
}

/// Create a migrated in-memory pool
pub async fn create_test_pool() -> SqlitePool {
    connect_database("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database pool")
}

/// Application state over a fresh database
pub async fn create_test_state() -> AppState {
    create_state_with_pool(&test_config(), create_test_pool().await).expect("Failed to create test state")
}

/// Test server running the full router over a fresh database
pub async fn create_test_server() -> TestServer {
    let state = create_test_state().await;
    TestServer::new(create_router(state)).expect("Failed to create test server")
}
