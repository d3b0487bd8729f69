/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler and
 * middleware in the backend. Each variant maps to a fixed HTTP status code
 * and a client-facing message.
 *
 * # Error Categories
 *
 * ## Authentication
 *
 * - `InvalidToken` - missing, malformed, expired or wrong-type bearer token
 * - `InvalidCredentials` - unknown username or wrong password at login
 *
 * ## Authorization
 *
 * - `Forbidden` - the principal lacks the role or ownership for the action
 *
 * ## Request Errors
 *
 * - `Conflict` - username or email already registered
 * - `NotFound` - the addressed user or order does not exist
 * - `Validation` - the request body failed validation
 *
 * ## Server Errors
 *
 * - `Database`, `PasswordHash`, `Config`, `Internal` - reported as 500 with a
 *   generic message; the cause is only logged
 */

use thiserror::Error;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use crate::shared::{ConfigError, SharedError};
use crate::backend::auth::sessions::TokenError;

/// Fixed message for a rejected access token
pub const INVALID_TOKEN: &str = "Invalid Token";
/// Fixed message for a rejected refresh token
pub const INVALID_REFRESH_TOKEN: &str = "Please provide a valid refresh token";
/// Fixed message for a failed login
pub const INVALID_CREDENTIALS: &str = "Invalid Username or Password";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use pizza_delivery::backend::error::BackendError;
///
/// let err = BackendError::not_found("No order with such id");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Bearer token missing, malformed, expired or of the wrong type
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Unknown username or password mismatch
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Username or email already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Role or ownership check failed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Addressed resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Startup configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Any other server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Access token rejection with the fixed client message
    pub fn invalid_token() -> Self {
        Self::InvalidToken(INVALID_TOKEN.to_string())
    }

    /// Refresh token rejection with the fixed client message
    pub fn invalid_refresh_token() -> Self {
        Self::InvalidToken(INVALID_REFRESH_TOKEN.to_string())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidToken`, `Forbidden` - 401 Unauthorized
    /// - `InvalidCredentials`, `Conflict`, `Validation` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidToken(_) | Self::Forbidden(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials | Self::Conflict(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Database(_) | Self::PasswordHash(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Server errors collapse to a generic message so store or hashing
    /// details never reach the client.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidToken(message)
            | Self::Conflict(message)
            | Self::Forbidden(message)
            | Self::NotFound(message) => message.clone(),
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            Self::Validation(err) => err.to_string(),
            Self::Config(_) | Self::Database(_) | Self::PasswordHash(_) | Self::Internal(_) => {
                "Internal Server Error".to_string()
            }
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(e) => Self::internal(format!("failed to sign token: {}", e)),
            TokenError::Config(e) => Self::Config(e),
            TokenError::Invalid(_) | TokenError::WrongType { .. } => Self::invalid_token(),
        }
    }
}

/// Unparseable body: malformed JSON, missing field, unknown label, wrong content type
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::Validation(SharedError::validation("body", rejection.body_text()))
    }
}

/// Path segment that does not parse into the parameter type
impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameter: {}", rejection.body_text());
        Self::Validation(SharedError::validation("path", rejection.body_text()))
    }
}
