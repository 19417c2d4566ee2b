//! Shared Module
//!
//! Types that do not depend on the HTTP layer: entity read models, form
//! input and validation, configuration and shared error types.

/// Entity read models
pub mod models;

/// Form input and validation
pub mod forms;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{Author, Comment, Follow, Group, Post};
pub use forms::{CommentInput, FormErrors, LoginInput, PostDraft, PostInput, SignupInput};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
