/**
 * Login Handler
 *
 * `GET /auth/login/` shows the form, `POST /auth/login/` checks the
 * credentials.
 *
 * # Authentication Process
 *
 * 1. Look up user by username, or by email when the input contains `@`
 * 2. Verify password using bcrypt
 * 3. Issue a session token in the `session` cookie
 * 4. Redirect to `next` when it is a local path, else to the index
 *
 * # Security
 *
 * - An unknown user and a wrong password give the same message
 * - `next` is only followed for paths on this site
 */

use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::verify;

use crate::backend::auth::handlers::types::{login_page, LoginQuery, FORM_ERROR, INVALID_CREDENTIALS};
use crate::backend::auth::sessions::{create_token, session_cookie};
use crate::backend::auth::users::{get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;
use crate::backend::middleware::{safe_next, AuthenticatedUser, CurrentUser};
use crate::backend::server::state::AppState;
use crate::shared::forms::{FormErrors, LoginInput};

/// Login form, carrying `next` into a hidden field
pub async fn login_form(
    CurrentUser(user): CurrentUser,
    Query(query): Query<LoginQuery>,
) -> Result<Response, BackendError> {
    login_page(user.as_ref(), "", query.next.as_deref(), &FormErrors::new())
}

/// Login handler
///
/// Wrong credentials render the form again (200) with one generic error.
pub async fn login(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> Result<Response, BackendError> {
    let pool = &app_state.db_pool;
    let username = input.username.trim();
    tracing::info!("Login request for: {}", username);

    let account = if username.contains('@') {
        get_user_by_email(pool, username).await?
    } else {
        get_user_by_username(pool, username).await?
    };

    let account = match account {
        Some(account) if verify(&input.password, &account.password_hash)? => account,
        Some(_) => {
            tracing::warn!("Invalid password for user: {}", username);
            return invalid_credentials(user.as_ref(), &input);
        }
        None => {
            tracing::warn!("User not found: {}", username);
            return invalid_credentials(user.as_ref(), &input);
        }
    };

    let token = create_token(
        account.id,
        &account.username,
        &app_state.config.jwt_secret,
        app_state.config.session_ttl,
    )?;

    tracing::info!("User logged in successfully: {} ({})", account.username, account.id);

    let target = safe_next(input.next.as_deref());
    Ok((jar.add(session_cookie(token)), Redirect::to(target)).into_response())
}

fn invalid_credentials(
    user: Option<&AuthenticatedUser>,
    input: &LoginInput,
) -> Result<Response, BackendError> {
    let mut errors = FormErrors::new();
    errors.add(FORM_ERROR, INVALID_CREDENTIALS);
    login_page(user, input.username.trim(), input.next.as_deref(), &errors)
}
