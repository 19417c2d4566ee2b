//! Yatube - Main Library
//!
//! A server-rendered blogging site: users publish short posts with an
//! optional image, optionally inside a group, comment on posts and follow
//! other authors.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the HTTP layer
//!   - Entity read models, form input and validation
//!   - Configuration (`AppConfig`)
//!   - Error types
//!
//! - **`backend`** - Axum server
//!   - Entity store (SQLite via sqlx)
//!   - Feeds and pagination, page cache
//!   - Sessions, accounts and handlers
//!   - Tera templates
//!
//! # Usage
//!
//! ```rust,no_run
//! use yatube::backend::server::init::create_app;
//! use yatube::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `shared::ConfigError` for configuration problems
//! - `backend::error::BackendError` for everything a request can hit; it
//!   renders itself as an HTML error page or a login redirect

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
