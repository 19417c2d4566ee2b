/**
 * Server Configuration
 *
 * This module opens the entity store: it builds the SQLite connection pool
 * from `AppConfig::database_url` and applies the embedded migrations.
 *
 * # Error Handling
 *
 * Unlike the optional services of a larger deployment, the store is
 * required: a connection or migration failure is returned to the caller and
 * stops the server from starting.
 */

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::shared::AppConfig;

/// Maximum number of pooled connections for a file database
const MAX_CONNECTIONS: u32 = 8;

/// Open the database named by the configuration and run migrations
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS);
    connect_database(options, &config.database_url).await
}

/// Connect with the given pool options and bring the schema up to date
///
/// The database file is created when missing and foreign keys are enforced
/// on every connection.
pub async fn connect_database(
    options: SqlitePoolOptions,
    database_url: &str,
) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let connect_options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = options.connect_with(connect_options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
