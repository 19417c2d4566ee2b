/**
 * Post Routes
 *
 * # Routes
 *
 * ## Feeds
 * - `GET /` - all posts (cached)
 * - `GET /group/{slug}/` - posts of a group
 * - `GET /profile/{username}/` - posts of an author
 * - `GET /follow/` - posts of followed authors (login required)
 *
 * ## Posts
 * - `GET /posts/{post_id}/` - post detail
 * - `GET|POST /create/` - new post (login required)
 * - `GET|POST /posts/{post_id}/edit/` - edit a post (author only)
 * - `POST /posts/{post_id}/comment/` - add a comment (login required)
 *
 * ## Follows
 * - `GET /profile/{username}/follow/`
 * - `GET /profile/{username}/unfollow/`
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::posts::handlers::{
    add_comment, follow_index, group_posts, index, post_create, post_create_form, post_detail,
    post_edit, post_edit_form, profile, profile_follow, profile_unfollow,
};
use crate::backend::server::state::AppState;

/// Configure post, feed and follow routes
pub fn configure_post_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(index))
        .route("/group/{slug}/", get(group_posts))
        .route("/profile/{username}/", get(profile))
        .route("/profile/{username}/follow/", get(profile_follow))
        .route("/profile/{username}/unfollow/", get(profile_unfollow))
        .route("/follow/", get(follow_index))
        .route("/create/", get(post_create_form).post(post_create))
        .route("/posts/{post_id}/", get(post_detail))
        .route("/posts/{post_id}/edit/", get(post_edit_form).post(post_edit))
        .route("/posts/{post_id}/comment/", post(add_comment))
}
