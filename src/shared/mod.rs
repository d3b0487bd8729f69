//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the HTTP layer and the store. These types are used for serialization over
//! the JSON API and for mapping rows out of the database.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that do not depend on
//! the `ssr` feature: order enums and records, validation errors and the
//! application configuration.

/// Order records, pizza sizes and order statuses
pub mod order;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use order::{Order, OrderRequest, OrderStatus, OrderStatusRequest, PizzaSize};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
