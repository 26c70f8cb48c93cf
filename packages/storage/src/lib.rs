// ABOUTME: Data layer and persistence for Solvelens
// ABOUTME: SQLite-backed provider configuration storage and the config bridge trait

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use thiserror::Error;
use tracing::debug;

pub mod bridge;
pub mod provider_config;

pub use bridge::ConfigBridge;
pub use provider_config::{Provider, ProviderConfig, ProviderConfigStorage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Open (creating if necessary) the sqlite database and run pending migrations.
pub async fn connect(path: &str) -> Result<SqlitePool, StorageError> {
    debug!("Opening database at: {}", path);

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Open the database at the path resolved from the environment.
pub async fn connect_default() -> Result<SqlitePool, StorageError> {
    connect(&solvelens_config::database_path()).await
}
