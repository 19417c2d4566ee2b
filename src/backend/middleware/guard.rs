//! Author-only guard
//!
//! A non-author who reaches the edit form of a post is sent back to the
//! post itself. This is not an error: the response is a plain redirect and
//! the post is left untouched.

use axum::response::Redirect;

use crate::backend::middleware::auth::AuthenticatedUser;
use crate::backend::routes::urls::post_url;
use crate::shared::models::Post;

/// `Ok` when `user` wrote `post`, otherwise the redirect to its detail page
pub fn require_author(post: &Post, user: &AuthenticatedUser) -> Result<(), Redirect> {
    if post.is_authored_by(user.user_id) {
        Ok(())
    } else {
        tracing::warn!(
            post_id = post.id,
            user = %user.username,
            "Edit attempt by a non-author"
        );
        Err(Redirect::to(&post_url(post.id)))
    }
}
