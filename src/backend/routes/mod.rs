//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports
//! ├── router.rs        - Main router creation, layers, static files
//! ├── post_routes.rs   - Feeds, posts, comments, follows
//! ├── auth_routes.rs   - Signup, login, logout
//! ├── about_routes.rs  - Static about pages
//! └── urls.rs          - Paths used in redirects
//! ```

/// Main router creation
pub mod router;

pub mod post_routes;

pub mod auth_routes;

pub mod about_routes;

/// Redirect targets
pub mod urls;

pub use router::create_router;
