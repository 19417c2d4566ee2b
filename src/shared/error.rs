//! Shared Error Types
//!
//! This module defines error types that are shared between the entity layer,
//! the form layer and the HTTP backend. These errors represent failures that
//! are independent of the transport.
//!
//! # Error Categories
//!
//! - `ValidationError` - Form or entity validation failures
//!
//! # Usage
//!
//! ```rust
//! use yatube::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Post text cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur outside of a request context
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
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
}
