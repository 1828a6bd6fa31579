//!
//! # Data Access
//!
//! The database collaborator. Bootstrap hands it a constructed
//! [`AppConfig`](crate::config::AppConfig) and it returns a ready connection
//! pool: the SQLite file is created if absent and the schema is applied
//! idempotently. The pool's lifetime is tied to the application state;
//! [`close`] is the explicit teardown entry point for callers that want to
//! flush connections before the process exits.

use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::error::AppError;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Opens the connection pool for the configured database file and ensures
/// the schema exists.
pub async fn init(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    sqlx::query(SCHEMA).execute(&pool).await?;

    debug!("database ready at {}", config.database.display());
    Ok(pool)
}

/// Closes the pool, waiting for in-flight connections to finish.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
}
