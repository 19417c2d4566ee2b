//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are returned by HTTP handlers and converted to responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` for `BackendError`
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers return
//! `Result<Response, BackendError>` and propagate with `?`. A
//! `NotFound` renders `core/404.html`, a login-required error redirects to
//! `/auth/login/?next=...`, and store or template failures render
//! `core/500.html`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
