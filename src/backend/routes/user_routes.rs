/**
 * User Management Routes
 *
 * - `GET /users`, `POST /users`
 * - `PUT /users/{id}`, `DELETE /users/{id}`
 *
 * All require an access token; the handlers additionally require staff.
 */

use axum::{
    middleware,
    routing::{get, put},
    Router,
};

use crate::backend::accounts::{create_user, delete_user, list_users, update_user};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

pub fn configure_user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}
