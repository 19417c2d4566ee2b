//! Follow edges and the followed-authors feed

mod common;

use axum::http::StatusCode;

use common::{assert_login_redirect, assert_redirect, create_test_user, post_cards, TestApp};

#[tokio::test]
async fn test_follow_then_unfollow() {
    let app = TestApp::new().await;
    create_test_user(&app, "leo").await;
    let anna = create_test_user(&app, "anna").await;
    let before = app.follow_count().await;

    let response = app
        .server
        .get("/profile/leo/follow/")
        .add_cookie(anna.cookie.clone())
        .await;
    assert_redirect(&response, "/profile/leo/");
    assert_eq!(app.follow_count().await, before + 1);

    let profile = app
        .server
        .get("/profile/leo/")
        .add_cookie(anna.cookie.clone())
        .await
        .text();
    assert_contains!(profile, "/profile/leo/unfollow/");

    let response = app
        .server
        .get("/profile/leo/unfollow/")
        .add_cookie(anna.cookie.clone())
        .await;
    assert_redirect(&response, "/profile/leo/");
    assert_eq!(app.follow_count().await, before);
}

#[tokio::test]
async fn test_follow_twice_makes_one_edge() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    let anna = create_test_user(&app, "anna").await;

    for _ in 0..2 {
        app.server
            .get("/profile/leo/follow/")
            .add_cookie(anna.cookie.clone())
            .await;
    }

    assert_eq!(app.follow_count().await, 1);
    let edges = app.follows_of(anna.id).await;
    assert_eq!(edges[0].author_id, leo.id);
}

#[tokio::test]
async fn test_self_follow_is_ignored() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;

    let response = app
        .server
        .get("/profile/leo/follow/")
        .add_cookie(leo.cookie.clone())
        .await;

    assert_redirect(&response, "/profile/leo/");
    assert_eq!(app.follow_count().await, 0);
}

#[tokio::test]
async fn test_follow_unknown_author_is_404() {
    let app = TestApp::new().await;
    let anna = create_test_user(&app, "anna").await;

    let response = app
        .server
        .get("/profile/ghost/follow/")
        .add_cookie(anna.cookie.clone())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_anonymous_follow_redirects_to_login() {
    let app = TestApp::new().await;
    create_test_user(&app, "leo").await;

    let response = app.server.get("/profile/leo/follow/").await;

    assert_login_redirect(&response, "/profile/leo/follow/");
    assert_eq!(app.follow_count().await, 0);
}

#[tokio::test]
async fn test_anonymous_unfollow_redirects_to_login() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    let anna = create_test_user(&app, "anna").await;
    app.server
        .get("/profile/leo/follow/")
        .add_cookie(anna.cookie.clone())
        .await;
    assert_eq!(app.follow_count().await, 1);

    let response = app.server.get("/profile/leo/unfollow/").await;

    assert_login_redirect(&response, "/profile/leo/unfollow/");
    assert_eq!(app.follow_count().await, 1);
    assert_eq!(app.follows_of(anna.id).await[0].author_id, leo.id);
}

#[tokio::test]
async fn test_unfollow_unknown_author_is_404() {
    let app = TestApp::new().await;
    let anna = create_test_user(&app, "anna").await;

    let response = app
        .server
        .get("/profile/ghost/unfollow/")
        .add_cookie(anna.cookie.clone())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unfollow_without_edge_redirects_to_profile() {
    let app = TestApp::new().await;
    create_test_user(&app, "leo").await;
    let anna = create_test_user(&app, "anna").await;

    let response = app
        .server
        .get("/profile/leo/unfollow/")
        .add_cookie(anna.cookie.clone())
        .await;

    assert_redirect(&response, "/profile/leo/");
    assert_eq!(app.follow_count().await, 0);
}

#[tokio::test]
async fn test_follow_feed_requires_login() {
    let app = TestApp::new().await;

    let response = app.server.get("/follow/").await;
    assert_login_redirect(&response, "/follow/");
}

#[tokio::test]
async fn test_followed_post_reaches_followers_only() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    let anna = create_test_user(&app, "anna").await;
    let ivan = create_test_user(&app, "ivan").await;

    app.server
        .get("/profile/leo/follow/")
        .add_cookie(anna.cookie.clone())
        .await;
    app.create_post(leo.id, "News from Leo", None).await;

    let follower_feed = app
        .server
        .get("/follow/")
        .add_cookie(anna.cookie.clone())
        .await;
    assert_eq!(follower_feed.status_code(), StatusCode::OK);
    assert_contains!(follower_feed.text(), "News from Leo");

    let other_feed = app
        .server
        .get("/follow/")
        .add_cookie(ivan.cookie.clone())
        .await
        .text();
    assert_not_contains!(other_feed, "News from Leo");
    assert_eq!(post_cards(&other_feed), 0);
}
