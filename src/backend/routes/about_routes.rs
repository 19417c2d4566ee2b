use axum::{routing::get, Router};

use crate::backend::about;
use crate::backend::server::state::AppState;

/// `/about/author/` and `/about/tech/`
pub fn configure_about_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/about/author/", get(about::author))
        .route("/about/tech/", get(about::tech))
}
