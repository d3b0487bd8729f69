/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue an access token and a refresh token
 *
 * An unknown username and a wrong password produce the same 400 response.
 */
use axum::{
    extract::State,
    response::Json,
};
use bcrypt::verify;

use crate::backend::auth::users::get_user_by_username;
use crate::backend::auth::handlers::types::{LoginRequest, TokenPair};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenPair>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&state.db_pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            BackendError::InvalidCredentials
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::InvalidCredentials);
    }

    let access = state.tokens.issue_access(&user.username)?;
    let refresh = state.tokens.issue_refresh(&user.username)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(TokenPair { access, refresh }))
}
