//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - The application fixture (in-memory database, temporary media root)
//! - User and session helpers
//! - Custom assertion macros

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
