//! Entity Store
//!
//! SQLite persistence for groups, posts, comments and follow edges, one
//! submodule per table. Every operation is a free async function over a
//! `SqlitePool` returning `Result<_, sqlx::Error>`; the schema lives in
//! `migrations/`.
//!
//! User accounts are stored by `backend::auth::users`.

/// Post queries and writes
pub mod posts;

/// Group queries and writes
pub mod groups;

/// Comment queries and writes
pub mod comments;

/// Follow edges
pub mod follows;

pub use posts::PostFilter;
