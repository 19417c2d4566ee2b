//! Feed Module
//!
//! Ordered, paginated post listings for the four feed scopes: everything,
//! one group, one author, and the authors a user follows.
//!
//! - **`paginator`** - page-number resolution and the `Page` container
//! - **`assembler`** - scope resolution and the store queries

/// Page-number arithmetic
pub mod paginator;

/// Scope resolution and feed assembly
pub mod assembler;

pub use assembler::{Feed, FeedAssembler, FeedScope, FeedSubject};
pub use paginator::{Page, PageWindow, Paginator};
