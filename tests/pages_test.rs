//! Read-only pages: status codes and what they show

mod common;

use axum::http::StatusCode;

use common::{create_test_user, post_cards, TestApp};

#[tokio::test]
async fn test_index_lists_posts() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    app.create_post(leo.id, "War and peace", None).await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "War and peace");
    assert_eq!(post_cards(&html), 1);
}

#[tokio::test]
async fn test_empty_index_is_ok() {
    let app = TestApp::new().await;

    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(post_cards(&response.text()), 0);
}

#[tokio::test]
async fn test_group_page() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    let cats = app.create_group("cats", "Cats").await;
    app.create_post(leo.id, "A cat post", Some(cats.id)).await;
    app.create_post(leo.id, "A post without a group", None).await;

    let response = app.server.get("/group/cats/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Posts of group Cats");
    assert_contains!(html, "A cat post");
    assert_not_contains!(html, "A post without a group");
}

#[tokio::test]
async fn test_unknown_group_is_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/group/nope/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_group_without_posts_is_404() {
    let app = TestApp::new().await;
    app.create_group("empty", "Empty").await;

    let response = app.server.get("/group/empty/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_page() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    let anna = create_test_user(&app, "anna").await;
    app.create_post(leo.id, "Leo writes", None).await;
    app.create_post(leo.id, "Leo writes again", None).await;
    app.create_post(anna.id, "Anna writes", None).await;

    let response = app.server.get("/profile/leo/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Posts: 2");
    assert_contains!(html, "Leo writes again");
    assert_not_contains!(html, "Anna writes");
}

#[tokio::test]
async fn test_unknown_profile_is_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/profile/ghost/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_detail() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    let post = app.create_post(leo.id, "A detailed post", None).await;

    let response = app.server.get(&format!("/posts/{}/", post.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), "A detailed post");
}

#[tokio::test]
async fn test_post_detail_shows_edit_link_to_author_only() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;
    let anna = create_test_user(&app, "anna").await;
    let post = app.create_post(leo.id, "Mine", None).await;
    let edit_link = format!("/posts/{}/edit/", post.id);

    let as_author = app
        .server
        .get(&format!("/posts/{}/", post.id))
        .add_cookie(leo.cookie.clone())
        .await;
    assert_contains!(as_author.text(), &edit_link);

    let as_other = app
        .server
        .get(&format!("/posts/{}/", post.id))
        .add_cookie(anna.cookie.clone())
        .await;
    assert_not_contains!(as_other.text(), &edit_link);
}

#[tokio::test]
async fn test_unknown_post_is_404() {
    let app = TestApp::new().await;

    assert_eq!(app.server.get("/posts/999/").await.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(app.server.get("/posts/abc/").await.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_about_pages() {
    let app = TestApp::new().await;

    assert_eq!(app.server.get("/about/author/").await.status_code(), StatusCode::OK);
    assert_eq!(app.server.get("/about/tech/").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let app = TestApp::new().await;

    let response = app.server.get("/unexisting_page/").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "The page you requested does not exist.");
}

#[tokio::test]
async fn test_navigation_follows_session() {
    let app = TestApp::new().await;
    let leo = create_test_user(&app, "leo").await;

    let anonymous = app.server.get("/about/tech/").await.text();
    assert_contains!(anonymous, "/auth/login/");
    assert_not_contains!(anonymous, "/auth/logout/");

    let logged_in = app
        .server
        .get("/about/tech/")
        .add_cookie(leo.cookie.clone())
        .await
        .text();
    assert_contains!(logged_in, "/auth/logout/");
    assert_contains!(logged_in, "/profile/leo/");
}

#[tokio::test]
async fn test_static_files_are_served() {
    let app = TestApp::new().await;

    let response = app.server.get("/static/css/main.css").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
