//! Feed pages
//!
//! `GET /`, `GET /group/{slug}/`, `GET /profile/{username}/` and
//! `GET /follow/`. Every feed accepts `?page=N`; out-of-range and malformed
//! numbers are resolved by the paginator. The index page is served through
//! the page cache.

use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::backend::cache::PageCache;
use crate::backend::error::BackendError;
use crate::backend::feed::{FeedAssembler, FeedScope, FeedSubject};
use crate::backend::middleware::{AuthUser, CurrentUser};
use crate::backend::render::{render, FeedContext, GroupContext, ProfileContext};

pub const INDEX_TITLE: &str = "Latest updates";
pub const FOLLOW_TITLE: &str = "Latest from the authors you follow";

/// `?page=` of every feed
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// All posts, newest first; cached per viewer and URI
pub async fn index(
    State(assembler): State<FeedAssembler>,
    State(page_cache): State<PageCache>,
    CurrentUser(user): CurrentUser,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Response, BackendError> {
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let key = PageCache::key(user.as_ref().map(|u| u.user_id), path);

    if let Some(html) = page_cache.get(&key).await {
        return Ok(Html(html.to_string()).into_response());
    }

    let feed = assembler
        .assemble(FeedScope::All, user.as_ref(), query.page.as_deref())
        .await?;

    let context = FeedContext {
        user: user.as_ref(),
        title: INDEX_TITLE,
        page: &feed.page,
    };
    let Html(html) = render("posts/index.html", &context)?;

    page_cache.insert(key, html.as_str()).await;
    Ok(Html(html).into_response())
}

/// Posts of one group; unknown and empty groups are 404
pub async fn group_posts(
    State(assembler): State<FeedAssembler>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, BackendError> {
    let feed = assembler
        .assemble(FeedScope::Group(&slug), user.as_ref(), query.page.as_deref())
        .await?;

    let FeedSubject::Group(group) = &feed.subject else {
        return Err(BackendError::not_found(format!("group '{}'", slug)));
    };

    let context = GroupContext {
        user: user.as_ref(),
        title: format!("Posts of group {}", group),
        group,
        page: &feed.page,
    };
    Ok(render("posts/group_list.html", &context)?.into_response())
}

/// Posts of one author with the follow button state
pub async fn profile(
    State(assembler): State<FeedAssembler>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, BackendError> {
    let feed = assembler
        .assemble(FeedScope::Author(&username), user.as_ref(), query.page.as_deref())
        .await?;

    let FeedSubject::Author(author) = &feed.subject else {
        return Err(BackendError::not_found(format!("user '{}'", username)));
    };

    let context = ProfileContext {
        user: user.as_ref(),
        title: format!("Profile of {}", author),
        author,
        page: &feed.page,
        count: feed.total(),
        following: feed.following,
    };
    Ok(render("posts/profile.html", &context)?.into_response())
}

/// Posts by the authors the caller follows
pub async fn follow_index(
    State(assembler): State<FeedAssembler>,
    AuthUser(user): AuthUser,
    Query(query): Query<PageQuery>,
) -> Result<Response, BackendError> {
    let feed = assembler
        .assemble(FeedScope::Followed(&user), Some(&user), query.page.as_deref())
        .await?;

    let context = FeedContext {
        user: Some(&user),
        title: FOLLOW_TITLE,
        page: &feed.page,
    };
    Ok(render("posts/follow.html", &context)?.into_response())
}
