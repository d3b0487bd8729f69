/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication and user management handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::SharedError;

fn default_true() -> bool {
    true
}

/// Body of `POST /auth/signup` and `POST /users`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.username.trim().is_empty() {
            return Err(SharedError::validation("username", "Username must not be empty"));
        }
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password must not be empty"));
        }
        Ok(())
    }
}

/// Basic shape check: something on both sides of a single '@'
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(SharedError::validation("email", "Invalid email format")),
    }
}

/// Body of `PUT /users/{id}`; omitted fields are left unchanged
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserUpdateRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserUpdateRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if matches!(&self.username, Some(username) if username.trim().is_empty()) {
            return Err(SharedError::validation("username", "Username must not be empty"));
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if matches!(&self.password, Some(password) if password.is_empty()) {
            return Err(SharedError::validation("password", "Password must not be empty"));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by a successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body returned by `GET /auth/refresh`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccessToken {
    pub access: String,
}

/// Public view of a user; never carries the password hash
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_staff: user.is_staff,
            is_active: user.is_active,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn hello() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}
