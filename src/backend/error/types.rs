/**
 * Backend Error Types
 *
 * This module defines the errors a request handler can end with. Each one is
 * turned into a response by the `IntoResponse` implementation in
 * `conversion`.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `NotFound` - unknown group, post or user, or a group without posts
 * - `Unauthenticated` - an anonymous caller reached a login-only page; the
 *   response is a redirect to the login form
 * - `HandlerError` - malformed request data with an explicit status
 *
 * ## Server errors
 *
 * Store, template, file-system and session-token failures. They render the
 * generic error page; details only go to the log.
 *
 * A rejected form is not an error: the handler renders the form again with
 * its field errors. A non-author editing a post is not an error either: the
 * guard redirects to the post.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// The addressed entity does not exist
    #[error("Not found: {what}")]
    NotFound {
        /// What was looked up, for the log
        what: String,
    },

    /// Login required; `next` is the path to return to
    #[error("Authentication required for {next}")]
    Unauthenticated { next: String },

    /// Handler error (e.g., malformed multipart data)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session token could not be issued
    #[error("Session error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create a new login-required error for the given return path
    pub fn unauthenticated(next: impl Into<String>) -> Self {
        Self::Unauthenticated { next: next.into() }
    }

    /// Create a new handler error with a status code
    ///
    /// # Example
    ///
    /// ```rust
    /// use yatube::backend::error::BackendError;
    /// use axum::http::StatusCode;
    ///
    /// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
    /// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    /// ```
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Unauthenticated` - 303 See Other (redirect to the login form)
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthenticated { .. } => StatusCode::SEE_OTHER,
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::Database(_)
            | Self::Template(_)
            | Self::Io(_)
            | Self::Session(_)
            | Self::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { what } => format!("{} not found", what),
            Self::Unauthenticated { next } => format!("login required for {}", next),
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}
