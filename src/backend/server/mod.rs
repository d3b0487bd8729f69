//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig` is loaded from the environment and validated
//! 2. **Token service**: signing keys and lifetimes are prepared
//! 3. **Database**: the SQLite pool is opened and migrated
//! 4. **Router**: routes, middleware and the trace layer are assembled
//!
//! # Example
//!
//! ```rust,no_run
//! use pizza_delivery::backend::server::create_app;
//! use pizza_delivery::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&AppConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

pub mod state;

pub mod config;

pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, create_state, create_state_with_pool};
