//! Custom assertion macros and utilities
//!
//! Provides assertions on rendered pages and redirect responses with more
//! descriptive failure messages.

use axum::http::{header::LOCATION, StatusCode};
use axum_test::TestResponse;

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a string does not contain a substring
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            !$haystack.contains($needle),
            "Expected '{}' not to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a `303 See Other` to `location`
#[track_caller]
pub fn assert_redirect(response: &TestResponse, location: &str) {
    assert_eq!(
        response.status_code(),
        StatusCode::SEE_OTHER,
        "Expected a redirect to {}, got: {}",
        location,
        response.text()
    );
    assert_eq!(response.header(LOCATION), location);
}

/// Assert a redirect to the login form that returns to `next`
#[track_caller]
pub fn assert_login_redirect(response: &TestResponse, next: &str) {
    let expected = format!("/auth/login/?next={}", urlencoding::encode(next));
    assert_redirect(response, &expected);
}

/// Number of post cards on a rendered feed page
pub fn post_cards(html: &str) -> usize {
    html.matches("<article class=\"post\">").count()
}
