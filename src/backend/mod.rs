//! Backend Module
//!
//! This module contains all server-side code for the pizza delivery service.
//! It provides an Axum HTTP server that authenticates users with JWT bearer
//! tokens and persists users and orders in SQLite through sqlx.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, token service, role checks, auth handlers
//! - **`orders`** - Order persistence and handlers
//! - **`accounts`** - Staff-only user management handlers
//! - **`middleware`** - Bearer token gate and principal extractors
//! - **`extract`** - `JsonBody` / `PathParam` extractors rejecting with `BackendError`
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Initialization, state, database
//! ├── routes/         - Route tables
//! ├── auth/           - Authentication and authorization
//! ├── orders/         - Order store and handlers
//! ├── accounts/       - /users handlers
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Body and path extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! client -> auth_middleware (token check) -> handler -> authorize -> sqlx -> JSON
//! ```
//!
//! Every handler receives the store through `State<AppState>`; there is no
//! global connection or session handle.

/// Server initialization and state management
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, tokens and role checks
pub mod auth;

/// Order persistence and handlers
pub mod orders;

/// User management handlers
pub mod accounts;

/// HTTP middleware
pub mod middleware;

/// Body and path extractors with JSON rejections
pub mod extract;

/// Backend error types
pub mod error;
