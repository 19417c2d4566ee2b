//! Post form handlers
//!
//! `/create/` publishes a new post as the caller. `/posts/{post_id}/edit/`
//! is reserved to the author; anyone else is sent back to the post. Both
//! forms re-render with the submitted input when validation fails.

use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::middleware::{require_author, AuthUser, AuthenticatedUser};
use crate::backend::posts::form::PostSubmission;
use crate::backend::posts::handlers::load_post;
use crate::backend::posts::media::save_image;
use crate::backend::render::{render, PostFormContext};
use crate::backend::routes::urls::{post_url, profile_url};
use crate::backend::store::groups::list_groups;
use crate::backend::store::posts::{create_post, update_post};
use crate::shared::forms::{FormErrors, PostInput};
use crate::shared::AppConfig;
use crate::shared::models::{Group, Post};

const TEMPLATE: &str = "posts/create_post.html";

/// Form state shared by both pages
struct PostForm<'a> {
    user: &'a AuthenticatedUser,
    groups: &'a [Group],
    editing: Option<&'a Post>,
}

impl PostForm<'_> {
    fn render(&self, input: &PostInput, errors: &FormErrors) -> Result<Response, BackendError> {
        let context = PostFormContext {
            user: Some(self.user),
            form: input,
            errors,
            groups: self.groups,
            is_edit: self.editing.is_some(),
            post_id: self.editing.map(|post| post.id),
            image: self.editing.and_then(|post| post.image.as_deref()),
        };
        Ok(render(TEMPLATE, &context)?.into_response())
    }
}

/// Store the image of a submission, if any
async fn store_image(
    config: &AppConfig,
    submission: &PostSubmission,
) -> Result<Option<String>, BackendError> {
    match &submission.image {
        Some(upload) => Ok(Some(save_image(&config.media_root, upload).await?)),
        None => Ok(None),
    }
}

/// Empty post form
pub async fn post_create_form(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Response, BackendError> {
    let groups = list_groups(&pool).await?;
    let form = PostForm {
        user: &user,
        groups: &groups,
        editing: None,
    };
    form.render(&PostInput::default(), &FormErrors::new())
}

/// Publish a post and go to the author's profile
pub async fn post_create(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<AppConfig>>,
    AuthUser(user): AuthUser,
    multipart: Multipart,
) -> Result<Response, BackendError> {
    let submission = PostSubmission::from_multipart(multipart).await?;
    let groups = list_groups(&pool).await?;

    let draft = match submission.validate(&groups) {
        Ok(draft) => draft,
        Err(errors) => {
            let form = PostForm {
                user: &user,
                groups: &groups,
                editing: None,
            };
            return form.render(&submission.input, &errors);
        }
    };

    let image = store_image(&config, &submission).await?;
    let post = create_post(&pool, user.user_id, &draft, image.as_deref()).await?;
    tracing::info!(post_id = post.id, author = %user.username, "Post created");

    Ok(Redirect::to(&profile_url(&user.username)).into_response())
}

/// Edit form pre-filled with the post
pub async fn post_edit_form(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Response, BackendError> {
    let post = load_post(&pool, &post_id).await?;
    if let Err(redirect) = require_author(&post, &user) {
        return Ok(redirect.into_response());
    }

    let groups = list_groups(&pool).await?;
    let input = PostInput {
        text: post.text.clone(),
        group: post.group_id.map(|id| id.to_string()).unwrap_or_default(),
    };
    let form = PostForm {
        user: &user,
        groups: &groups,
        editing: Some(&post),
    };
    form.render(&input, &FormErrors::new())
}

/// Save the edited post and go back to it
pub async fn post_edit(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<AppConfig>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
    multipart: Multipart,
) -> Result<Response, BackendError> {
    let post = load_post(&pool, &post_id).await?;
    if let Err(redirect) = require_author(&post, &user) {
        return Ok(redirect.into_response());
    }

    let submission = PostSubmission::from_multipart(multipart).await?;
    let groups = list_groups(&pool).await?;

    let draft = match submission.validate(&groups) {
        Ok(draft) => draft,
        Err(errors) => {
            let form = PostForm {
                user: &user,
                groups: &groups,
                editing: Some(&post),
            };
            return form.render(&submission.input, &errors);
        }
    };

    let image = store_image(&config, &submission).await?;
    update_post(&pool, post.id, &draft, image.as_deref()).await?;
    tracing::info!(post_id = post.id, "Post updated");

    Ok(Redirect::to(&post_url(post.id)).into_response())
}
