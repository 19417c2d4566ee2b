/**
 * Signup Handler
 *
 * `GET /auth/signup/` shows the form, `POST /auth/signup/` creates the
 * account.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password format
 * 2. Check that neither username nor email is taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue a session token in the `session` cookie
 * 6. Redirect to the index
 *
 * A rejected submission renders the form again (200) with the username and
 * email the user typed and one message per failing field.
 */

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::hash;

use crate::backend::auth::handlers::types::{signup_page, FORM_ERROR};
use crate::backend::auth::sessions::{create_token, session_cookie};
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::routes::urls::INDEX;
use crate::backend::server::state::AppState;
use crate::shared::forms::{FormErrors, SignupInput};

/// Sign up form
pub async fn signup_form(CurrentUser(user): CurrentUser) -> Result<Response, BackendError> {
    signup_page(user.as_ref(), &SignupInput::default(), &FormErrors::new())
}

/// Sign up handler
///
/// # Errors
///
/// * `Database` - store failure other than a unique-constraint race
/// * `Password` / `Session` - hashing or token issuing failed
pub async fn signup(
    State(app_state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
    Form(input): Form<SignupInput>,
) -> Result<Response, BackendError> {
    let pool = &app_state.db_pool;
    let username = input.username.trim();
    let email = input.email.trim();
    tracing::info!("Signup request for: {}", username);

    let mut errors = input.validate().err().unwrap_or_default();

    if errors.is_empty() {
        if get_user_by_username(pool, username).await?.is_some() {
            errors.add("username", "A user with that username already exists.");
        }
        if get_user_by_email(pool, email).await?.is_some() {
            errors.add("email", "A user with that email already exists.");
        }
    }

    if !errors.is_empty() {
        tracing::warn!("Signup rejected for {}: {:?}", username, errors);
        return signup_page(user.as_ref(), &input, &errors);
    }

    let password_hash = hash(&input.password, app_state.config.password_cost)?;

    let new_user = match create_user(pool, username, email, &password_hash).await {
        Ok(new_user) => new_user,
        Err(e) if is_unique_violation(&e) => {
            // Taken between the check above and the insert.
            tracing::warn!("Signup raced on a unique column: {}", username);
            errors.add(FORM_ERROR, "A user with that username or email already exists.");
            return signup_page(user.as_ref(), &input, &errors);
        }
        Err(e) => return Err(e.into()),
    };

    let token = create_token(
        new_user.id,
        &new_user.username,
        &app_state.config.jwt_secret,
        app_state.config.session_ttl,
    )?;

    tracing::info!("User created successfully: {} ({})", new_user.username, new_user.id);

    Ok((jar.add(session_cookie(token)), Redirect::to(INDEX)).into_response())
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}
