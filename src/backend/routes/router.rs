/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Post routes (feeds, post pages, follows)
 * 2. Account routes (signup, login, logout)
 * 3. About pages
 * 4. Static files (`/static`) and uploaded media (`/media`)
 * 5. Fallback handler (404 page)
 *
 * Every request passes through the HTTP trace layer and then the session
 * middleware, which attaches the caller's identity when the session cookie
 * is valid.
 */

use axum::{http::Uri, middleware::from_fn_with_state, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::middleware::session_middleware;
use crate::backend::routes::{
    about_routes::configure_about_routes, auth_routes::configure_auth_routes,
    post_routes::configure_post_routes,
};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (config, pool, feed assembler, cache)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_post_routes(router);
    let router = configure_auth_routes(router);
    let router = configure_about_routes(router);

    let router = router
        .nest_service("/static", ServeDir::new(&app_state.config.static_root))
        .nest_service("/media", ServeDir::new(&app_state.config.media_root))
        .fallback(not_found);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn_with_state(app_state.clone(), session_middleware)),
        )
        .with_state(app_state)
}

async fn not_found(uri: Uri) -> BackendError {
    BackendError::not_found(format!("page '{}'", uri.path()))
}
