//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SALES_DATABASE_URL` - `PostgreSQL` connection string for the sales database
//!   (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `SALES_SINGLE_STORE_MODE` - Treat the deployment as single-store and skip
//!   the website prompt (`1`, `true`, `yes`, `on`; default: off)
//! - `RUST_LOG` - Log filter (default: `salesdesk_cli=info,sd_cli=info`)

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Skip website selection and use the default store view's website
    pub single_store_mode: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database URL is missing or a flag
    /// has an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SALES_DATABASE_URL")?;
        let single_store_mode = get_optional_env("SALES_SINGLE_STORE_MODE")
            .map(|value| parse_flag("SALES_SINGLE_STORE_MODE", &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            database_url,
            single_store_mode,
        })
    }
}

fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to the generic name most tooling sets
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_truthy() {
        for value in ["1", "true", "TRUE", "yes", " on "] {
            assert!(parse_flag("TEST_FLAG", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_flag_falsy() {
        for value in ["0", "false", "No", "off", ""] {
            assert!(!parse_flag("TEST_FLAG", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_flag_invalid() {
        let err = parse_flag("TEST_FLAG", "maybe").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TEST_FLAG"));
    }
}
