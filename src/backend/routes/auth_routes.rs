/**
 * Account Routes
 *
 * - `GET|POST /auth/signup/` - registration
 * - `GET|POST /auth/login/` - login, honours `?next=`
 * - `GET /auth/logout/` - clears the session (login required)
 */

use axum::{routing::get, Router};

use crate::backend::auth::{login, login_form, logout, signup, signup_form};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup/", get(signup_form).post(signup))
        .route("/auth/login/", get(login_form).post(login))
        .route("/auth/logout/", get(logout))
}
