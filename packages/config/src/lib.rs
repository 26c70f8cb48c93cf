// ABOUTME: Configuration and environment variable management
// ABOUTME: Constants and environment lookups shared across Solvelens packages

pub mod constants;

use tracing::debug;

/// Read an environment variable, treating empty values as unset.
pub fn env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Resolve the sqlite database path from the environment.
///
/// Falls back to `solvelens.db` in the current directory when
/// `SOLVELENS_DB_PATH` is unset, which matches the desktop host's
/// working-directory layout.
pub fn database_path() -> String {
    env_var(constants::SOLVELENS_DB_PATH).unwrap_or_else(|| {
        debug!("SOLVELENS_DB_PATH not set, using default database path");
        "solvelens.db".to_string()
    })
}
