/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Reject a taken email, then a taken username
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Return the created user (without password)
 *
 * The same registration path backs `POST /users`.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use bcrypt::hash;

use crate::backend::auth::users::{
    create_user, get_user_by_email, get_user_by_username, NewUser, User, EMAIL_TAKEN, USERNAME_TAKEN,
};
use crate::backend::auth::handlers::types::{SignupRequest, UserResponse};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;

/// Validate, hash and persist a new user
///
/// # Errors
///
/// * `Validation` - empty username/password or malformed email
/// * `Conflict` - email or username already registered
pub async fn register(state: &AppState, request: SignupRequest) -> Result<User, BackendError> {
    request.validate()?;

    if get_user_by_email(&state.db_pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict(EMAIL_TAKEN));
    }

    if get_user_by_username(&state.db_pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::conflict(USERNAME_TAKEN));
    }

    let password_hash = hash(&request.password, state.password_hash_cost)?;

    let user = create_user(
        &state.db_pool,
        NewUser {
            username: request.username,
            email: request.email,
            password_hash,
            is_staff: request.is_staff,
            is_active: request.is_active,
        },
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);
    Ok(user)
}

/// Sign up handler
///
/// # Example Request
///
/// ```http
/// POST /auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "johndoe",
///   "email": "johndoe@gmail.com",
///   "password": "password",
///   "is_staff": false,
///   "is_active": true
/// }
/// ```
///
/// # Example Response (201)
///
/// ```json
/// {
///   "id": 1,
///   "username": "johndoe",
///   "email": "johndoe@gmail.com",
///   "is_staff": false,
///   "is_active": true
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    tracing::info!("Signup request for username: {}, email: {}", request.username, request.email);

    let user = register(&state, request).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}
