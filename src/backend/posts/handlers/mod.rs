//! Post Handlers
//!
//! - **`feeds`** - index, group, profile and follow feeds
//! - **`detail`** - a single post with its comments
//! - **`edit`** - create and edit forms (author only for editing)
//! - **`comments`** - add a comment
//! - **`follows`** - follow and unfollow an author

pub mod feeds;

pub mod detail;

pub mod edit;

pub mod comments;

pub mod follows;

pub use comments::add_comment;
pub use detail::post_detail;
pub use edit::{post_create, post_create_form, post_edit, post_edit_form};
pub use feeds::{follow_index, group_posts, index, profile};
pub use follows::{profile_follow, profile_unfollow};

use crate::backend::error::BackendError;
use crate::backend::store::posts::get_post;
use crate::shared::models::Post;
use sqlx::SqlitePool;

/// Load a post addressed by the raw `{post_id}` path segment
///
/// A segment that is not an integer addresses no post.
pub(crate) async fn load_post(pool: &SqlitePool, raw_id: &str) -> Result<Post, BackendError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| BackendError::not_found(format!("post '{}'", raw_id)))?;

    get_post(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("post {}", id)))
}
