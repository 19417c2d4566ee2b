/**
 * Authentication Handler Types
 *
 * Query types of the account pages and the rendering helpers shared by the
 * signup and login handlers. Form bodies are the `SignupInput` and
 * `LoginInput` types from `shared::forms`.
 */

use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::render::{render, LoginContext, SignupContext};
use crate::shared::forms::{FormErrors, SignupInput};

/// Form-wide error key, rendered above the fields
pub const FORM_ERROR: &str = "form";

/// Generic message for a failed login; never says which part was wrong
pub const INVALID_CREDENTIALS: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Query of `GET /auth/login/`
#[derive(Deserialize, Debug, Default)]
pub struct LoginQuery {
    /// Path to return to after logging in
    pub next: Option<String>,
}

/// Render the signup form with the given input and errors
pub fn signup_page(
    user: Option<&AuthenticatedUser>,
    form: &SignupInput,
    errors: &FormErrors,
) -> Result<Response, BackendError> {
    let context = SignupContext { user, form, errors };
    Ok(render("users/signup.html", &context)?.into_response())
}

/// Render the login form
pub fn login_page(
    user: Option<&AuthenticatedUser>,
    username: &str,
    next: Option<&str>,
    errors: &FormErrors,
) -> Result<Response, BackendError> {
    let context = LoginContext {
        user,
        username,
        next,
        errors,
    };
    Ok(render("users/login.html", &context)?.into_response())
}
