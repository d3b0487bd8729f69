//! Middleware Module
//!
//! This module contains HTTP middleware and the extractors that read what the
//! middleware leaves behind.
//!
//! - **`auth`** - Access token gate, principal extractor, refresh extractor
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use pizza_delivery::backend::auth::handlers::protected_hello;
//! use pizza_delivery::backend::middleware::auth_middleware;
//! use pizza_delivery::backend::server::state::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/order/", get(protected_hello))
//!         .route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser, RefreshSubject};
