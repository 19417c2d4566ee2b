//! Entity types
//!
//! Read models for the blog entities as the store returns them. Rows that
//! reference another entity carry the few columns the pages need (author
//! username, group slug and title) so a feed page is one query.
//!
//! The account record with its password hash lives in
//! `backend::auth::users`; [`Author`] is its public projection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Number of characters of a post shown where a short label is needed
pub const POST_LABEL_LEN: usize = 15;

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub username: String,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// A community posts can be published in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A post joined with its author and optional group
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
    pub author_username: String,
    pub group_id: Option<i64>,
    pub group_slug: Option<String>,
    pub group_title: Option<String>,
    /// Path relative to the media root, e.g. `posts/cat.gif`
    pub image: Option<String>,
}

impl Post {
    /// First characters of the text, used as the page title of a post
    pub fn label(&self) -> String {
        self.text.chars().take(POST_LABEL_LEN).collect()
    }

    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A comment joined with its author
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub text: String,
    pub created: DateTime<Utc>,
}

/// Directed follow edge: `user_id` follows `author_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Follow {
    pub id: i64,
    pub user_id: i64,
    pub author_id: i64,
}
