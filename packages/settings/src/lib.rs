// ABOUTME: Provider settings management for Solvelens
// ABOUTME: API key validation and the load/edit/validate/save form lifecycle

pub mod form;
pub mod validation;

pub use form::{FormState, ModelStage, SettingsError, SettingsForm};
pub use validation::{is_valid_key, validate_config, ValidationError};
