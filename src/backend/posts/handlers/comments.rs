//! `POST /posts/{post_id}/comment/`

use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::handlers::load_post;
use crate::backend::routes::urls::post_url;
use crate::backend::store::comments::create_comment;
use crate::shared::forms::CommentInput;

/// Add a comment as the caller
///
/// Redirects to the post whether or not the text was accepted; a blank
/// comment is dropped.
pub async fn add_comment(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
    Form(input): Form<CommentInput>,
) -> Result<Response, BackendError> {
    let post = load_post(&pool, &post_id).await?;

    match input.validate() {
        Ok(text) => {
            let id = create_comment(&pool, post.id, user.user_id, &text).await?;
            tracing::info!(comment_id = id, post_id = post.id, "Comment added");
        }
        Err(errors) => tracing::debug!(?errors, post_id = post.id, "Comment rejected"),
    }

    Ok(Redirect::to(&post_url(post.id)).into_response())
}
