//! Template contexts
//!
//! Every page gets an explicit struct. `user` is the viewer, used by the
//! navigation in `base.html`.

use serde::Serialize;

use crate::backend::feed::Page;
use crate::backend::middleware::AuthenticatedUser;
use crate::shared::forms::{CommentInput, FormErrors, PostInput, SignupInput};
use crate::shared::models::{Author, Comment, Group, Post};

/// Static pages: about pages, logged-out page
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub title: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(user: Option<&'a AuthenticatedUser>, title: &'a str) -> Self {
        Self { user, title }
    }
}

/// `posts/index.html` and `posts/follow.html`
#[derive(Debug, Serialize)]
pub struct FeedContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub title: &'a str,
    pub page: &'a Page<Post>,
}

/// `posts/group_list.html`
#[derive(Debug, Serialize)]
pub struct GroupContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub title: String,
    pub group: &'a Group,
    pub page: &'a Page<Post>,
}

/// `posts/profile.html`
#[derive(Debug, Serialize)]
pub struct ProfileContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub title: String,
    pub author: &'a Author,
    pub page: &'a Page<Post>,
    /// Posts by the author in total
    pub count: usize,
    pub following: bool,
}

/// `posts/post_detail.html`
#[derive(Debug, Serialize)]
pub struct PostDetailContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub title: String,
    pub post: &'a Post,
    pub comments: &'a [Comment],
    /// Posts by the same author in total
    pub count: i64,
    /// The viewer wrote the post
    pub is_edit: bool,
    pub form: &'a CommentInput,
}

/// `posts/create_post.html`, for both creating and editing
#[derive(Debug, Serialize)]
pub struct PostFormContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub form: &'a PostInput,
    pub errors: &'a FormErrors,
    pub groups: &'a [Group],
    pub is_edit: bool,
    pub post_id: Option<i64>,
    /// Image currently attached to the edited post
    pub image: Option<&'a str>,
}

/// `users/signup.html`
#[derive(Debug, Serialize)]
pub struct SignupContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub form: &'a SignupInput,
    pub errors: &'a FormErrors,
}

/// `users/login.html`
#[derive(Debug, Serialize)]
pub struct LoginContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub username: &'a str,
    pub next: Option<&'a str>,
    pub errors: &'a FormErrors,
}

/// `core/404.html`, `core/500.html`, `core/error.html`
#[derive(Debug, Serialize)]
pub struct ErrorPageContext<'a> {
    pub user: Option<&'a AuthenticatedUser>,
    pub status: u16,
    pub message: Option<String>,
}
