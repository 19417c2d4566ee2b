/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, template compilation and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Open the database and run migrations
 * 2. Compile the embedded templates
 * 3. Create the media directory for uploaded images
 * 4. Build the application state and the router
 *
 * Any failure aborts startup: the server never runs without its store or
 * its templates.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::posts::media::POSTS_DIR;
use crate::backend::render;
use crate::backend::routes::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// * `Database` - the database could not be opened or migrated
/// * `Template` - an embedded template failed to compile
/// * `Io` - the media directory could not be created
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Yatube backend server");

    let db_pool = load_database(&config).await?;

    render::init()?;
    tracing::info!("Templates compiled");

    tokio::fs::create_dir_all(config.media_root.join(POSTS_DIR)).await?;

    let app_state = AppState::new(config, db_pool);
    tracing::info!(
        posts_per_page = app_state.feed.posts_per_page(),
        "Application state initialized"
    );

    Ok(create_router(app_state))
}
