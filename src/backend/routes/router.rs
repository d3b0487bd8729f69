/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. `GET /` - public hello
 * 2. Auth routes (`/auth/...`)
 * 3. Order routes (`/order/...`), all behind the auth middleware
 * 4. User management routes (`/users...`), all behind the auth middleware
 * 5. Fallback handler (JSON 404)
 *
 * Every request is wrapped in a `TraceLayer` span.
 */

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::auth::handlers::hello;
use crate::backend::error::BackendError;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::order_routes::configure_order_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

async fn fallback() -> BackendError {
    BackendError::not_found("Not Found")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the pool and token service
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(hello))
        .merge(configure_auth_routes(&app_state))
        .merge(configure_order_routes(&app_state))
        .merge(configure_user_routes(&app_state));

    // Fallback handler for 404
    let router = router.fallback(fallback);

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
