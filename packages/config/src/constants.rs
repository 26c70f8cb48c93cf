// ABOUTME: Environment variable name and default value constants
// ABOUTME: Centralized definitions shared across all Solvelens packages

// Database Configuration
pub const SOLVELENS_DB_PATH: &str = "SOLVELENS_DB_PATH";

// Default per-stage models (used until the user saves their own preferences)
pub const DEFAULT_EXTRACTION_MODEL: &str = "gpt-4o";
pub const DEFAULT_SOLUTION_MODEL: &str = "gpt-4o";
pub const DEFAULT_DEBUGGING_MODEL: &str = "gpt-4o";

// Provider console pages where users create API keys
pub const OPENAI_KEY_PAGE_URL: &str = "https://platform.openai.com/api-keys";
pub const CLAUDE_KEY_PAGE_URL: &str = "https://console.anthropic.com/settings/keys";
