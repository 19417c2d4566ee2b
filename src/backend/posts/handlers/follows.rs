//! Follow edges
//!
//! `GET /profile/{username}/follow/` and `/unfollow/`. Both end on the
//! author's profile. Following yourself is silently ignored and a repeated
//! follow leaves the single existing edge.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_author_by_username;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::routes::urls::profile_url;
use crate::backend::store::follows::{follow, unfollow};
use crate::shared::models::Author;

async fn load_author(pool: &SqlitePool, username: &str) -> Result<Author, BackendError> {
    get_author_by_username(pool, username)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("user '{}'", username)))
}

pub async fn profile_follow(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(username): Path<String>,
) -> Result<Response, BackendError> {
    let author = load_author(&pool, &username).await?;

    if author.id != user.user_id {
        let created = follow(&pool, user.user_id, author.id).await?;
        tracing::info!(follower = %user.username, author = %author, created, "Follow");
    }

    Ok(Redirect::to(&profile_url(&author.username)).into_response())
}

pub async fn profile_unfollow(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(username): Path<String>,
) -> Result<Response, BackendError> {
    let author = load_author(&pool, &username).await?;

    let removed = unfollow(&pool, user.user_id, author.id).await?;
    tracing::info!(follower = %user.username, author = %author, removed, "Unfollow");

    Ok(Redirect::to(&profile_url(&author.username)).into_response())
}
