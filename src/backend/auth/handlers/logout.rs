//! Logout handler: `GET /auth/logout/`

use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::expired_session_cookie;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::render::{render, PageContext};

/// Drop the session cookie and show the logged-out page
pub async fn logout(AuthUser(user): AuthUser, jar: CookieJar) -> Result<Response, BackendError> {
    tracing::info!("User logged out: {}", user.username);

    let page = render("users/logged_out.html", &PageContext::new(None, "Logged out"))?;
    Ok((jar.remove(expired_session_cookie()), page).into_response())
}
