/**
 * Authentication Middleware
 *
 * This module gates protected routes. It extracts the bearer token from the
 * Authorization header, validates it as an access token, resolves the subject
 * to a stored user and hands the resulting principal to handlers through
 * request extensions.
 *
 * A separate extractor validates refresh tokens for the refresh endpoint,
 * which is deliberately not behind the access-token middleware.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::roles::Role;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated principal resolved from an access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme name is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    Some(token.trim()).filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates it as an access token
/// 3. Loads the user named by the token subject
/// 4. Attaches an `AuthenticatedUser` to request extensions
///
/// Returns 401 `Invalid Token` if any step fails.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::invalid_token()
    })?;

    let subject = state.tokens.validate_access(token).map_err(|e| {
        tracing::warn!("Invalid access token: {}", e);
        BackendError::invalid_token()
    })?;

    // A valid token for a deleted account is treated like any invalid token
    let user = get_user_by_username(&state.db_pool, &subject)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", subject);
            BackendError::invalid_token()
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        role: user.role(),
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the principal set by `auth_middleware`
///
/// Rejects with 401 when used on a route that is not behind the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::invalid_token()
            })?;

        Ok(AuthUser(user))
    }
}

/// Axum extractor yielding the subject of a valid refresh token
#[derive(Clone, Debug)]
pub struct RefreshSubject(pub String);

impl<S> FromRequestParts<S> for RefreshSubject
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = Arc::<TokenService>::from_ref(state);

        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing refresh token");
            BackendError::invalid_refresh_token()
        })?;

        let subject = tokens.validate_refresh(token).map_err(|e| {
            tracing::warn!("Invalid refresh token: {}", e);
            BackendError::invalid_refresh_token()
        })?;

        Ok(RefreshSubject(subject))
    }
}
