/**
 * User Model and Database Operations
 *
 * This module holds the credential store: user rows and the queries that
 * read and write them. Username and email are unique; the store reports a
 * violated UNIQUE constraint as `BackendError::Conflict` so concurrent signups
 * cannot surface as server errors.
 */

use sqlx::SqlitePool;

use crate::backend::auth::roles::Role;
use crate::backend::error::BackendError;

pub const EMAIL_TAKEN: &str = "User with the email already exists";
pub const USERNAME_TAKEN: &str = "User with the username already exists";

const USER_COLUMNS: &str = "id, username, email, password_hash, is_staff, is_active";

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub is_staff: bool,
    pub is_active: bool,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from_staff_flag(self.is_staff)
    }
}

/// Fields of a user about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_active: bool,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Create a new user
///
/// # Returns
/// Created user, or `Conflict` when the username or email is already taken
pub async fn create_user(pool: &SqlitePool, user: NewUser) -> Result<User, BackendError> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (username, email, password_hash, is_staff, is_active)
        VALUES (?, ?, ?, ?, ?)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.is_staff)
    .bind(user.is_active)
    .fetch_one(pool)
    .await
    .map_err(unique_violation_to_conflict)?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by username
pub async fn get_user_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List every user ordered by ID
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Apply a partial update to a user
///
/// # Returns
/// Updated user, `None` if no user has this ID
pub async fn update_user(pool: &SqlitePool, id: i64, changes: UserChanges) -> Result<Option<User>, BackendError> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET username = COALESCE(?, username),
            email = COALESCE(?, email),
            password_hash = COALESCE(?, password_hash)
        WHERE id = ?
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(changes.username)
    .bind(changes.email)
    .bind(changes.password_hash)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(unique_violation_to_conflict)?;

    Ok(user)
}

/// Delete a user; their orders keep existing without an owner
///
/// # Returns
/// Whether a row was deleted
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn unique_violation_to_conflict(err: sqlx::Error) -> BackendError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = if db_err.message().contains("users.email") {
                EMAIL_TAKEN
            } else {
                USERNAME_TAKEN
            };
            tracing::warn!("Unique constraint violated: {}", db_err.message());
            return BackendError::conflict(message);
        }
    }
    BackendError::Database(err)
}
