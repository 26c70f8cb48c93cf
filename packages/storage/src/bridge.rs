// ABOUTME: Configuration bridge trait between the settings form and the host
// ABOUTME: Async load/save of provider configuration plus fire-and-forget link opening

use async_trait::async_trait;
use tracing::info;

use crate::provider_config::{ProviderConfig, ProviderConfigStorage};
use crate::StorageError;

/// Boundary the settings form talks to for configuration persistence.
///
/// Desktop hosts back this with their own storage; `ProviderConfigStorage`
/// provides the local sqlite implementation.
#[async_trait]
pub trait ConfigBridge: Send + Sync {
    async fn get_config(&self) -> Result<ProviderConfig, StorageError>;

    async fn update_config(&self, config: &ProviderConfig) -> Result<(), StorageError>;

    /// Fire-and-forget. Hosts with a shell override this to open the URL in
    /// the user's browser; the default only records the request.
    fn open_link(&self, url: &str) {
        info!("Link open requested: {}", url);
    }
}

#[async_trait]
impl ConfigBridge for ProviderConfigStorage {
    async fn get_config(&self) -> Result<ProviderConfig, StorageError> {
        ProviderConfigStorage::get_config(self).await
    }

    async fn update_config(&self, config: &ProviderConfig) -> Result<(), StorageError> {
        ProviderConfigStorage::update_config(self, config).await
    }
}
