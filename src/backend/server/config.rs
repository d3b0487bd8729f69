/**
 * Database Configuration
 *
 * This module opens the SQLite connection pool and applies the embedded
 * migrations from `migrations/`.
 *
 * # In-memory Databases
 *
 * Every connection to `sqlite::memory:` opens a separate, empty database.
 * In-memory URLs are therefore pinned to one connection that is never
 * recycled, so the schema and data live as long as the pool.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::AppConfig;

/// Connect to the database described by the configuration and migrate it
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    if config.is_in_memory_database() {
        tracing::warn!("Using an in-memory database; all data is lost on shutdown");
    }
    connect_database(&config.database_url, config.max_connections).await
}

/// Connect to `database_url`, creating the file if needed, and run migrations
pub async fn connect_database(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
