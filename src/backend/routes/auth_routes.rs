/**
 * Authentication Routes
 *
 * # Routes
 *
 * - `POST /auth/signup` - User registration (public)
 * - `POST /auth/login` - Token pair for username + password (public)
 * - `GET /auth/refresh` - New access token; checks the refresh token itself
 * - `GET /auth/` - Hello, requires an access token
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{login, protected_hello, refresh, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// The refresh route is not behind `auth_middleware`: it is called with a
/// refresh token, which the access-token gate rejects.
pub fn configure_auth_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/", get(protected_hello))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/refresh", get(refresh))
        .merge(protected)
}
