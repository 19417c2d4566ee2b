//! Authentication Module
//!
//! This module handles user accounts and the session identity.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token generation and validation, session cookie
//! - **`handlers`** - signup, login and logout pages
//!
//! # Authentication Flow
//!
//! A successful signup or login stores a signed token in the `session`
//! cookie. The session middleware (`backend::middleware::auth`) verifies it
//! on every request and resolves the user; a token whose user no longer
//! exists counts as anonymous.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens expire after `AppConfig::session_ttl` (30 days by default)
//! - The signing secret comes from `AppConfig::jwt_secret`

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for the account pages
pub mod handlers;

pub use handlers::{login, login_form, logout, signup, signup_form};
