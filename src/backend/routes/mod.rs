//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation
//! ├── auth_routes.rs   - Signup, login, refresh
//! ├── order_routes.rs  - Order CRUD
//! └── user_routes.rs   - Staff user management
//! ```
//!
//! # Authentication
//!
//! Protected groups attach `auth_middleware` with `route_layer`, so unmatched
//! paths still reach the 404 fallback instead of a 401.
//!
//! # Example
//!
//! ```rust,no_run
//! use pizza_delivery::backend::routes::create_router;
//! use pizza_delivery::backend::server::create_state;
//! use pizza_delivery::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = create_state(&AppConfig::from_env()?).await?;
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

/// Order routes
pub mod order_routes;

/// User management routes
pub mod user_routes;

// Re-export commonly used functions
pub use router::create_router;
