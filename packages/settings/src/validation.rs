// ABOUTME: API key format validation for AI providers
// ABOUTME: Provider-specific pattern rules with field-specific error messages

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use solvelens_storage::provider_config::{Provider, ProviderConfig};

static OPENAI_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sk-[A-Za-z0-9]{32,}$").unwrap());

// Anthropic keys appear in the wild with both dash and underscore separators
static CLAUDE_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sk[-_]ant[-_][A-Za-z0-9]{32,}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("OpenAI API key is required")]
    OpenAiKeyMissing,

    #[error("Invalid OpenAI API key format. Keys start with 'sk-' followed by at least 32 characters")]
    OpenAiKeyInvalid,

    #[error("Claude API key is required")]
    ClaudeKeyMissing,

    #[error("Invalid Claude API key format. Keys start with 'sk-ant-' followed by at least 32 characters")]
    ClaudeKeyInvalid,
}

/// Check whether a candidate key matches the provider's key format.
///
/// Total over all inputs: malformed or empty strings are simply false.
pub fn is_valid_key(key: &str, provider: Provider) -> bool {
    let trimmed = key.trim();
    match provider {
        Provider::OpenAi => OPENAI_KEY_PATTERN.is_match(trimmed),
        Provider::Claude => CLAUDE_KEY_PATTERN.is_match(trimmed),
    }
}

/// Validate that the key the active provider requires is present and
/// well-formed
pub fn validate_config(config: &ProviderConfig) -> Result<(), ValidationError> {
    let key = config.active_key().trim();

    match config.provider {
        Provider::OpenAi => {
            if key.is_empty() {
                return Err(ValidationError::OpenAiKeyMissing);
            }
            if !OPENAI_KEY_PATTERN.is_match(key) {
                return Err(ValidationError::OpenAiKeyInvalid);
            }
        }
        Provider::Claude => {
            if key.is_empty() {
                return Err(ValidationError::ClaudeKeyMissing);
            }
            if !CLAUDE_KEY_PATTERN.is_match(key) {
                return Err(ValidationError::ClaudeKeyInvalid);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openai_key() -> String {
        format!("sk-{}", "a".repeat(32))
    }

    fn claude_key() -> String {
        format!("sk-ant-{}", "a".repeat(32))
    }

    #[test]
    fn test_openai_key_valid() {
        assert!(is_valid_key(&openai_key(), Provider::OpenAi));
        assert!(is_valid_key(&format!("sk-{}", "Z9".repeat(20)), Provider::OpenAi));
    }

    #[test]
    fn test_openai_key_trims_whitespace() {
        assert!(is_valid_key(&format!("  {}  ", openai_key()), Provider::OpenAi));
    }

    #[test]
    fn test_openai_key_invalid() {
        assert!(!is_valid_key("", Provider::OpenAi));
        assert!(!is_valid_key("sk-short", Provider::OpenAi));
        assert!(!is_valid_key(&"a".repeat(40), Provider::OpenAi));
        // 31 characters after the prefix is one too few
        assert!(!is_valid_key(&format!("sk-{}", "a".repeat(31)), Provider::OpenAi));
        // Punctuation is not allowed in the key body
        assert!(!is_valid_key(&format!("sk-{}!", "a".repeat(32)), Provider::OpenAi));
        // Claude keys are not OpenAI keys
        assert!(!is_valid_key(&claude_key(), Provider::OpenAi));
    }

    #[test]
    fn test_claude_key_valid() {
        assert!(is_valid_key(&claude_key(), Provider::Claude));
        assert!(is_valid_key(&format!("sk_ant_{}", "b".repeat(32)), Provider::Claude));
        assert!(is_valid_key(&format!("sk-ant_{}", "b".repeat(32)), Provider::Claude));
    }

    #[test]
    fn test_claude_key_invalid() {
        assert!(!is_valid_key("", Provider::Claude));
        assert!(!is_valid_key("sk-ant-short", Provider::Claude));
        assert!(!is_valid_key(&format!("sk-ant-{}", "b".repeat(31)), Provider::Claude));
        // An OpenAI-shaped key is not a Claude key
        assert!(!is_valid_key(&openai_key(), Provider::Claude));
    }

    #[test]
    fn test_validate_config_openai() {
        let mut config = ProviderConfig {
            api_key: openai_key(),
            ..ProviderConfig::default()
        };
        assert!(validate_config(&config).is_ok());

        config.api_key = String::new();
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::OpenAiKeyMissing)
        );

        config.api_key = "sk-short".to_string();
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::OpenAiKeyInvalid)
        );
    }

    #[test]
    fn test_validate_config_claude() {
        let mut config = ProviderConfig {
            provider: Provider::Claude,
            claude_api_key: claude_key(),
            ..ProviderConfig::default()
        };
        assert!(validate_config(&config).is_ok());

        config.claude_api_key = String::new();
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::ClaudeKeyMissing)
        );

        config.claude_api_key = "sk-ant".to_string();
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::ClaudeKeyInvalid)
        );
    }

    #[test]
    fn test_validate_config_ignores_inactive_key() {
        // A malformed Claude key is irrelevant while OpenAI is selected
        let config = ProviderConfig {
            api_key: openai_key(),
            claude_api_key: "garbage".to_string(),
            ..ProviderConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_error_messages_are_field_specific() {
        assert!(ValidationError::OpenAiKeyInvalid
            .to_string()
            .starts_with("Invalid OpenAI API key format"));
        assert_eq!(
            ValidationError::ClaudeKeyMissing.to_string(),
            "Claude API key is required"
        );
    }
}
