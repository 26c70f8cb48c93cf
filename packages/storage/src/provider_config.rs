// ABOUTME: Provider configuration type definitions and storage
// ABOUTME: AI provider selection, API keys, and per-stage model preferences

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::StorageError;

/// The upstream AI service the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Claude,
}

impl Provider {
    pub fn as_str(&self) -> &str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Claude => "claude",
        }
    }

    /// Console page where the user creates an API key for this provider.
    pub fn key_page_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => solvelens_config::constants::OPENAI_KEY_PAGE_URL,
            Provider::Claude => solvelens_config::constants::CLAUDE_KEY_PAGE_URL,
        }
    }
}

/// The user's provider configuration: active provider, API keys, and the
/// model to use for each pipeline stage.
///
/// Serialized in camelCase to match the shape the desktop host exchanges
/// over its configuration bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub provider: Provider,
    pub api_key: String,
    pub claude_api_key: String,
    pub extraction_model: String,
    pub solution_model: String,
    pub debugging_model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            api_key: String::new(),
            claude_api_key: String::new(),
            extraction_model: solvelens_config::constants::DEFAULT_EXTRACTION_MODEL.to_string(),
            solution_model: solvelens_config::constants::DEFAULT_SOLUTION_MODEL.to_string(),
            debugging_model: solvelens_config::constants::DEFAULT_DEBUGGING_MODEL.to_string(),
        }
    }
}

impl ProviderConfig {
    /// The key the active provider requires, untrimmed.
    pub fn active_key(&self) -> &str {
        match self.provider {
            Provider::OpenAi => &self.api_key,
            Provider::Claude => &self.claude_api_key,
        }
    }
}

/// Storage layer for the provider configuration
pub struct ProviderConfigStorage {
    pool: SqlitePool,
}

impl ProviderConfigStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current provider configuration
    /// Returns the default configuration if none has been saved yet
    pub async fn get_config(&self) -> Result<ProviderConfig, StorageError> {
        debug!("Fetching provider configuration");

        let result = sqlx::query_as::<_, ProviderConfig>(
            r#"
            SELECT provider, api_key, claude_api_key,
                   extraction_model, solution_model, debugging_model
            FROM provider_config WHERE id = 'default'
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        match result {
            Some(config) => Ok(config),
            None => {
                // Create the default row if it doesn't exist
                self.create_default_config().await?;

                // Fetch again after creating (avoiding recursion)
                sqlx::query_as::<_, ProviderConfig>(
                    r#"
                    SELECT provider, api_key, claude_api_key,
                           extraction_model, solution_model, debugging_model
                    FROM provider_config WHERE id = 'default'
                    "#,
                )
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::Sqlx)
            }
        }
    }

    /// Create the default configuration row, relying on column defaults
    async fn create_default_config(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO provider_config (id)
            VALUES ('default')
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Replace the stored configuration wholesale
    pub async fn update_config(&self, config: &ProviderConfig) -> Result<(), StorageError> {
        debug!("Updating provider configuration");

        sqlx::query(
            r#"
            INSERT INTO provider_config (
                id, provider, api_key, claude_api_key,
                extraction_model, solution_model, debugging_model
            ) VALUES ('default', ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                provider = excluded.provider,
                api_key = excluded.api_key,
                claude_api_key = excluded.claude_api_key,
                extraction_model = excluded.extraction_model,
                solution_model = excluded.solution_model,
                debugging_model = excluded.debugging_model,
                updated_at = datetime('now', 'utc')
            "#,
        )
        .bind(config.provider)
        .bind(&config.api_key)
        .bind(&config.claude_api_key)
        .bind(&config.extraction_model)
        .bind(&config.solution_model)
        .bind(&config.debugging_model)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(())
    }
}
