/**
 * Server Initialization
 *
 * This module builds the application: it validates configuration, opens and
 * migrates the database, constructs the token service and assembles the
 * router.
 *
 * # Initialization Process
 *
 * 1. Validate configuration
 * 2. Build the token service from the signing settings
 * 3. Connect to the database and run migrations
 * 4. Create the application state
 * 5. Create the router with all routes
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Build the application state from configuration
pub async fn create_state(config: &AppConfig) -> Result<AppState, BackendError> {
    config.validate()?;

    let tokens = TokenService::from_config(config)?;
    tracing::info!("Token service initialized ({})", config.jwt_algorithm);

    let db_pool = load_database(config).await?;

    Ok(AppState::new(db_pool, tokens, config.password_hash_cost))
}

/// Build the application state around an existing pool
pub fn create_state_with_pool(config: &AppConfig, db_pool: SqlitePool) -> Result<AppState, BackendError> {
    config.validate()?;
    let tokens = TokenService::from_config(config)?;
    Ok(AppState::new(db_pool, tokens, config.password_hash_cost))
}

/// Create the Axum app
pub async fn create_app(config: &AppConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing pizza delivery backend server");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
