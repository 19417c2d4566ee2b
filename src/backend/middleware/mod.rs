//! Middleware Module
//!
//! This module contains the HTTP middleware of the backend server and the
//! request guards built on it.
//!
//! - **`auth`** - session middleware and the `CurrentUser` / `AuthUser`
//!   extractors ("must be logged in")
//! - **`guard`** - "must be the post's author"
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use yatube::backend::middleware::session_middleware;
//!
//! let router = router.layer(from_fn_with_state(app_state.clone(), session_middleware));
//! ```

pub mod auth;

pub mod guard;

pub use auth::{
    login_url, safe_next, session_middleware, AuthUser, AuthenticatedUser, CurrentUser,
};
pub use guard::require_author;
