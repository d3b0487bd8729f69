//! Authentication Module
//!
//! This module handles user registration, login, token management and
//! authorization.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - Access/refresh token issuing and validation
//! - **`roles`** - Role enum and the single authorization function
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email, password → user created (201)
//! 2. **Login**: username, password → `{access, refresh}`
//! 3. **Refresh**: refresh token → `{access}`
//! 4. **API calls**: `Authorization: Bearer <access>` → principal resolved by
//!    the auth middleware
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never returned
//! - Tokens are HMAC-signed JWTs carrying their kind in the `type` claim
//! - Unknown usernames and wrong passwords are indistinguishable to clients

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Roles and authorization policy
pub mod roles;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, refresh, signup};
pub use roles::{authorize, Action, Role};
pub use sessions::{TokenError, TokenKind, TokenService};
