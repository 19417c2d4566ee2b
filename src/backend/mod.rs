//! Backend Module
//!
//! This module contains all server-side code for Yatube.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - Session resolution, login and author guards
//! - **`auth`** - Users, session tokens, signup/login/logout
//! - **`store`** - Posts, groups, comments and follow edges
//! - **`feed`** - Feed assembly and pagination
//! - **`posts`** - Post pages, post form, uploads, comments, follows
//! - **`about`** - Static about pages
//! - **`cache`** - Rendered page cache
//! - **`render`** - Embedded Tera templates and page contexts
//! - **`error`** - Backend error type and its HTML responses
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request middleware and guards
//! ├── auth/           - Accounts and sessions
//! ├── store/          - Database access
//! ├── feed/           - Feeds and paginator
//! ├── posts/          - Post handlers
//! ├── about/          - About pages
//! ├── cache/          - Page cache
//! ├── render/         - Templates
//! └── error/          - Error types
//! ```

/// Server initialization and state management
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request processing middleware
pub mod middleware;

/// Database access
pub mod store;

/// Feed assembly and pagination
pub mod feed;

/// Post handlers, form and uploads
pub mod posts;

/// About pages
pub mod about;

/// Rendered page cache
pub mod cache;

/// Template rendering
pub mod render;
