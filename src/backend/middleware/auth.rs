/**
 * Session Middleware
 *
 * This module resolves the optional identity of every request. The session
 * token is read from the `session` cookie, verified, and looked up in the
 * users table; when all of that succeeds an `AuthenticatedUser` is attached
 * to the request extensions. Anything else leaves the request anonymous.
 *
 * Handlers read the identity through two extractors:
 * - `CurrentUser` - optional identity, never rejects
 * - `AuthUser` - login required; anonymous callers are redirected to
 *   `/auth/login/?next=<original path>` before the handler runs
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use sqlx::SqlitePool;
use std::convert::Infallible;
use std::sync::Arc;

use crate::backend::auth::sessions::{verify_token, SESSION_COOKIE};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::routes::urls::INDEX;
use crate::shared::AppConfig;

/// Path of the login form
pub const LOGIN_PATH: &str = "/auth/login/";

/// Authenticated user data resolved from the session cookie
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// Session middleware
///
/// This middleware:
/// 1. Reads the session token from the cookie jar
/// 2. Verifies the token signature and expiry
/// 3. Loads the user the token names
/// 4. Attaches the user to the request extensions
///
/// Never rejects a request: a missing, invalid or stale token simply leaves
/// the request anonymous.
pub async fn session_middleware(
    State(config): State<Arc<AppConfig>>,
    State(pool): State<SqlitePool>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        match verify_token(cookie.value(), &config.jwt_secret) {
            Ok(claims) => {
                let user = match claims.user_id() {
                    Some(id) => get_user_by_id(&pool, id).await?,
                    None => None,
                };

                match user {
                    Some(user) => {
                        request.extensions_mut().insert(AuthenticatedUser {
                            user_id: user.id,
                            username: user.username,
                        });
                    }
                    None => tracing::debug!(sub = %claims.sub, "Session names an unknown user"),
                }
            }
            Err(e) => tracing::debug!("Ignoring invalid session token: {:?}", e),
        }
    }

    Ok(next.run(request).await)
}

/// Login form URL that returns to `next` afterwards
pub fn login_url(next: &str) -> String {
    format!("{}?next={}", LOGIN_PATH, urlencoding::encode(next))
}

/// `next` target after login: only local absolute paths are followed
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if is_local_path(path) => path,
        _ => INDEX,
    }
}

/// A same-site absolute path: `/` not followed by `/` or `\`, no control characters
fn is_local_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.first() == Some(&b'/')
        && !matches!(bytes.get(1), Some(b'/') | Some(b'\\'))
        && !bytes.iter().any(|b| b.is_ascii_control())
}

/// Optional identity of the caller
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}

/// Axum extractor for a required identity
///
/// Rejects anonymous callers with `BackendError::Unauthenticated`, which
/// responds with a redirect to the login form carrying the original path
/// and query.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticatedUser>() {
            Some(user) => Ok(AuthUser(user.clone())),
            None => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map(|pq| pq.as_str().to_string())
                    .unwrap_or_else(|| parts.uri.path().to_string());
                Err(BackendError::unauthenticated(next))
            }
        }
    }
}
