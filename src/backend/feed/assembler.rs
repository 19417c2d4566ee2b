//! Feed Assembler
//!
//! Resolves a [`FeedScope`] to a post filter, counts the matching posts and
//! fetches the requested page, newest first. An author feed also reports
//! whether the viewer follows that author.

use sqlx::SqlitePool;

use crate::backend::auth::users::get_author_by_username;
use crate::backend::error::BackendError;
use crate::backend::feed::paginator::{Page, Paginator};
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::store::follows::is_following;
use crate::backend::store::groups::get_group_by_slug;
use crate::backend::store::posts::{count_posts, list_posts, PostFilter};
use crate::shared::models::{Author, Group, Post};

/// Which posts a feed shows
#[derive(Debug, Clone, Copy)]
pub enum FeedScope<'a> {
    All,
    /// Posts in the group with this slug
    Group(&'a str),
    /// Posts by the user with this username
    Author(&'a str),
    /// Posts by the authors the caller follows; only constructible from an
    /// authenticated identity
    Followed(&'a AuthenticatedUser),
}

/// Entity a feed is about, for the page header
#[derive(Debug, Clone)]
pub enum FeedSubject {
    Everyone,
    Group(Group),
    Author(Author),
    Followed,
}

/// An assembled feed page
#[derive(Debug, Clone)]
pub struct Feed {
    pub subject: FeedSubject,
    pub page: Page<Post>,
    /// The viewer follows the author of an author feed
    pub following: bool,
}

impl Feed {
    /// Total posts in the scope (not just on this page)
    pub fn total(&self) -> usize {
        self.page.total
    }
}

/// Builds paginated feeds from the entity store
#[derive(Debug, Clone)]
pub struct FeedAssembler {
    pool: SqlitePool,
    paginator: Paginator,
}

impl FeedAssembler {
    pub fn new(pool: SqlitePool, posts_per_page: usize) -> Self {
        Self {
            pool,
            paginator: Paginator::new(posts_per_page),
        }
    }

    pub fn posts_per_page(&self) -> usize {
        self.paginator.per_page()
    }

    /// Assemble one page of a feed
    ///
    /// # Errors
    ///
    /// * `NotFound` - unknown group slug, a group without posts, or an
    ///   unknown username
    /// * `Database` - store failure
    pub async fn assemble(
        &self,
        scope: FeedScope<'_>,
        viewer: Option<&AuthenticatedUser>,
        page: Option<&str>,
    ) -> Result<Feed, BackendError> {
        let (subject, filter) = match scope {
            FeedScope::All => (FeedSubject::Everyone, PostFilter::All),
            FeedScope::Group(slug) => {
                let group = get_group_by_slug(&self.pool, slug)
                    .await?
                    .ok_or_else(|| BackendError::not_found(format!("group '{}'", slug)))?;
                let filter = PostFilter::Group(group.id);
                (FeedSubject::Group(group), filter)
            }
            FeedScope::Author(username) => {
                let author = get_author_by_username(&self.pool, username)
                    .await?
                    .ok_or_else(|| BackendError::not_found(format!("user '{}'", username)))?;
                let filter = PostFilter::Author(author.id);
                (FeedSubject::Author(author), filter)
            }
            FeedScope::Followed(user) => (FeedSubject::Followed, PostFilter::FollowedBy(user.user_id)),
        };

        let total = count_posts(&self.pool, filter).await?.max(0) as usize;

        // Empty groups are hidden rather than shown as an empty page.
        if let FeedSubject::Group(group) = &subject {
            if total == 0 {
                return Err(BackendError::not_found(format!("posts of group '{}'", group.slug)));
            }
        }

        let following = match (&subject, viewer) {
            (FeedSubject::Author(author), Some(viewer)) if author.id != viewer.user_id => {
                is_following(&self.pool, viewer.user_id, author.id).await?
            }
            _ => false,
        };

        let window = self.paginator.window(total, page);
        let items = list_posts(
            &self.pool,
            filter,
            window.limit as i64,
            window.offset as i64,
        )
        .await?;

        tracing::debug!(
            ?filter,
            total,
            page = window.number,
            shown = items.len(),
            "Feed assembled"
        );

        Ok(Feed {
            subject,
            page: Page::new(items, window, total),
            following,
        })
    }
}
