//! Authentication test helpers
//!
//! Provides utilities for creating test users and the session cookie that
//! authenticates them.

use axum_extra::extract::cookie::Cookie;

use yatube::backend::auth::sessions::{create_token, session_cookie};
use yatube::backend::auth::users::create_user;

use super::database::{TestApp, TEST_PASSWORD};

/// Test user with a ready session cookie
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub cookie: Cookie<'static>,
}

/// Create a user whose password is [`TEST_PASSWORD`]
pub async fn create_test_user(app: &TestApp, username: &str) -> TestUser {
    let email = format!("{}@example.com", username);
    let password_hash =
        bcrypt::hash(TEST_PASSWORD, app.state.config.password_cost).expect("Failed to hash password");

    let user = create_user(app.pool(), username, &email, &password_hash)
        .await
        .expect("Failed to create test user");

    let token = create_token(
        user.id,
        &user.username,
        &app.state.config.jwt_secret,
        app.state.config.session_ttl,
    )
    .expect("Failed to create test token");

    TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        cookie: session_cookie(token),
    }
}
