// ABOUTME: Settings form lifecycle over the host configuration bridge
// ABOUTME: Load on open, validate before submit, guarded Editing/Submitting transitions

use thiserror::Error;
use tracing::{info, warn};

use solvelens_storage::provider_config::{Provider, ProviderConfig};
use solvelens_storage::{ConfigBridge, StorageError};

use crate::validation::{validate_config, ValidationError};

/// Pipeline stage a model preference applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStage {
    Extraction,
    Solution,
    Debugging,
}

/// Form lifecycle state. A save in flight runs to completion or failure;
/// there is no cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to load settings: {0}")]
    Load(#[source] StorageError),

    #[error("Failed to save settings: {0}")]
    Save(#[source] StorageError),

    #[error("A save is already in progress")]
    SaveInProgress,
}

/// Edit buffer and lifecycle for the provider settings form.
///
/// Holds a transient copy of the configuration between `open` and `save`.
/// Only the owning event loop mutates it; the busy flag in `FormState`
/// guards against duplicate submissions, not concurrent access.
pub struct SettingsForm<B: ConfigBridge> {
    bridge: B,
    buffer: ProviderConfig,
    state: FormState,
    last_error: Option<String>,
}

impl<B: ConfigBridge> SettingsForm<B> {
    pub fn new(bridge: B) -> Self {
        Self {
            bridge,
            buffer: ProviderConfig::default(),
            state: FormState::Editing,
            last_error: None,
        }
    }

    /// Load the current configuration into the edit buffer.
    ///
    /// On failure the buffer stays at defaults and the error is both
    /// recorded for display and returned to the caller.
    pub async fn open(&mut self) -> Result<(), SettingsError> {
        match self.bridge.get_config().await {
            Ok(config) => {
                self.buffer = config;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Failed to load settings: {}", err);
                self.buffer = ProviderConfig::default();
                let err = SettingsError::Load(err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Validate the edit buffer and submit it to the bridge.
    ///
    /// Rejected configurations never reach the bridge; the form stays in
    /// `Editing` with the buffer intact so the user can correct and retry.
    /// `Ok(())` is the completion signal on which callers refresh dependent
    /// state.
    pub async fn save(&mut self) -> Result<(), SettingsError> {
        if self.state == FormState::Submitting {
            return Err(SettingsError::SaveInProgress);
        }

        if let Err(err) = validate_config(&self.buffer) {
            self.last_error = Some(err.to_string());
            return Err(err.into());
        }

        self.state = FormState::Submitting;
        info!(
            "Saving provider configuration (provider: {})",
            self.buffer.provider.as_str()
        );

        let result = self.bridge.update_config(&self.buffer).await;
        self.state = FormState::Editing;

        match result {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Failed to save settings: {}", err);
                let err = SettingsError::Save(err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Ask the host to open the active provider's API key console page.
    pub fn open_key_page(&self) {
        self.bridge.open_link(self.buffer.provider.key_page_url());
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.buffer
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Most recent user-visible error, cleared by the next successful
    /// load or save.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_provider(&mut self, provider: Provider) {
        self.buffer.provider = provider;
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.buffer.api_key = key.into();
    }

    pub fn set_claude_api_key(&mut self, key: impl Into<String>) {
        self.buffer.claude_api_key = key.into();
    }

    pub fn set_model(&mut self, stage: ModelStage, model: impl Into<String>) {
        let model = model.into();
        match stage {
            ModelStage::Extraction => self.buffer.extraction_model = model,
            ModelStage::Solution => self.buffer.solution_model = model,
            ModelStage::Debugging => self.buffer.debugging_model = model,
        }
    }

    #[cfg(test)]
    fn set_state(&mut self, state: FormState) {
        self.state = state;
    }
}
