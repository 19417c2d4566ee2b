//! Authentication Handlers Module
//!
//! HTML form handlers of the account pages.
//!
//! # Handlers
//!
//! - **`signup_form`** / **`signup`** - GET/POST /auth/signup/
//! - **`login_form`** / **`login`** - GET/POST /auth/login/
//! - **`logout`** - GET /auth/logout/
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email, password → user created → session cookie set
//! 2. **Login**: username (or email), password → credentials verified →
//!    session cookie set → redirect to `next`
//! 3. **Logout**: session cookie removed
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - The session token is a signed JWT in an HttpOnly cookie
//! - Invalid credentials get one generic message (no user enumeration)

/// Query types and shared rendering helpers
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use login::{login, login_form};
pub use logout::logout;
pub use signup::{signup, signup_form};
