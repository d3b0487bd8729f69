/**
 * User Management Handlers
 *
 * Staff-only CRUD over user records for the `/users` routes. Creation shares
 * its validation, uniqueness checks and hashing with signup; updates re-hash
 * a new password before it is stored.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use bcrypt::hash;

use crate::backend::auth::handlers::register;
use crate::backend::auth::handlers::types::{SignupRequest, UserResponse, UserUpdateRequest};
use crate::backend::auth::roles::{authorize, Action};
use crate::backend::auth::users::{self, UserChanges};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, PathParam};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

pub const USER_NOT_FOUND: &str = "User not found";

/// `GET /users`
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    authorize(&caller, Action::ManageUsers)?;

    let users = users::list_users(&state.db_pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    authorize(&caller, Action::ManageUsers)?;

    let user = register(&state, request).await?;
    tracing::info!("User {} created by {}", user.username, caller.username);
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `PUT /users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    PathParam(id): PathParam<i64>,
    JsonBody(request): JsonBody<UserUpdateRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    authorize(&caller, Action::ManageUsers)?;
    request.validate()?;

    let password_hash = match request.password {
        Some(password) => Some(hash(&password, state.password_hash_cost)?),
        None => None,
    };

    let changes = UserChanges {
        username: request.username,
        email: request.email,
        password_hash,
    };

    let user = users::update_user(&state.db_pool, id, changes)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

    tracing::info!("User {} updated by {}", user.id, caller.username);
    Ok(Json(user.into()))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, BackendError> {
    authorize(&caller, Action::ManageUsers)?;

    if !users::delete_user(&state.db_pool, id).await? {
        return Err(BackendError::not_found(USER_NOT_FOUND));
    }

    tracing::info!("User {} deleted by {}", id, caller.username);
    Ok(StatusCode::NO_CONTENT)
}
