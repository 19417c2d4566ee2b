//! `GET /posts/{post_id}/`

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::posts::handlers::load_post;
use crate::backend::render::{render, PostDetailContext};
use crate::backend::store::comments::list_comments;
use crate::backend::store::posts::{count_posts, PostFilter};
use crate::shared::forms::CommentInput;

/// A post, its comments oldest first, and the comment form
pub async fn post_detail(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(post_id): Path<String>,
) -> Result<Response, BackendError> {
    let post = load_post(&pool, &post_id).await?;

    let comments = list_comments(&pool, post.id).await?;
    let count = count_posts(&pool, PostFilter::Author(post.author_id)).await?;
    let is_edit = user
        .as_ref()
        .is_some_and(|u| post.is_authored_by(u.user_id));

    let context = PostDetailContext {
        user: user.as_ref(),
        title: post.label(),
        post: &post,
        comments: &comments,
        count,
        is_edit,
        form: &CommentInput::default(),
    };
    Ok(render("posts/post_detail.html", &context)?.into_response())
}
