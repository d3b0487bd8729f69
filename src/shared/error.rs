//! Shared Error Types
//!
//! This module defines error types that are shared between the wire types and
//! the backend. They describe input that could not be turned into a domain
//! value, independent of any HTTP concerns.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed validation
//! - `UnknownChoice` - A value is not one of the allowed labels of an enum
//!
//! # Usage
//!
//! ```rust
//! use pizza_delivery::shared::error::SharedError;
//!
//! let error = SharedError::validation("quantity", "Quantity must be at least 1");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both wire parsing and backend logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A label that does not name any variant of a choice field
    #[error("Invalid value '{value}' for field '{field}', expected one of: {allowed}")]
    UnknownChoice {
        /// The field being parsed
        field: String,
        /// The rejected input
        value: String,
        /// Comma separated list of accepted labels
        allowed: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-choice error
    pub fn unknown_choice(field: impl Into<String>, value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::UnknownChoice {
            field: field.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } | Self::UnknownChoice { field, .. } => field,
        }
    }
}
