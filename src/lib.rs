//! Pizza Delivery - Main Library
//!
//! A pizza-ordering backend built on Axum and SQLite. Customers register, log
//! in with a username and password, receive an access/refresh token pair and
//! place orders; staff accounts can see every order and move orders through
//! their delivery status.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types that do not depend on the server stack
//!   - Order records, pizza sizes and statuses
//!   - Validation errors
//!   - Application configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and route tables
//!   - Token service, auth middleware and role checks
//!   - User and order persistence through sqlx
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the `pizza-server`
//!   binary.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pizza_delivery::backend::server::init::create_app;
//! use pizza_delivery::shared::AppConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod shared;

#[cfg(feature = "ssr")]
pub mod backend;
