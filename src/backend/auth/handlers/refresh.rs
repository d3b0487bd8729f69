/**
 * Token Refresh and Hello Handlers
 *
 * `GET /auth/refresh` trades a refresh token for a new access token bound to
 * the same subject. The hello handlers are liveness checks; the gated variant
 * doubles as a token check for clients.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AccessToken, MessageResponse};
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, RefreshSubject};

pub async fn refresh(
    State(tokens): State<Arc<TokenService>>,
    RefreshSubject(subject): RefreshSubject,
) -> Result<Json<AccessToken>, BackendError> {
    let access = tokens.issue_access(&subject)?;
    tracing::info!("Issued refreshed access token for {}", subject);
    Ok(Json(AccessToken { access }))
}

/// `GET /`
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::hello())
}

/// `GET /auth/` and `GET /order/`, behind the auth middleware
pub async fn protected_hello(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::debug!("Hello from {}", user.username);
    Json(MessageResponse::hello())
}
