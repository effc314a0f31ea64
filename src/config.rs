//! Validation limits and logging settings loaded from environment variables.
//!
//! ## Variables
//!
//! - `NICKNAME_MAX_LENGTH` - Maximum nickname length in characters (default: 30, range 3-255)
//! - `NICKNAME_CASE_INSENSITIVE` - Treat `Alice` and `alice` as the same nickname (default: false)
//! - `PASSWORD_MIN_LENGTH` - Minimum password length (default: 8, range 8-128)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! The nickname minimum (3) and the password special-character set are fixed.

use crate::domain::entities::{
    CaseSensitivity, DEFAULT_MAX_NICKNAME_LENGTH, MIN_NICKNAME_LENGTH, MIN_PASSWORD_LENGTH,
    NicknamePolicy, PasswordPolicy,
};
use anyhow::{Context, Result};
use std::env;

const MAX_NICKNAME_LENGTH_CEILING: usize = 255;
const MAX_PASSWORD_MIN_LENGTH: usize = 128;

/// Validation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub nickname_max_length: usize,
    pub nickname_case_insensitive: bool,
    pub password_min_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nickname_max_length: DEFAULT_MAX_NICKNAME_LENGTH,
            nickname_case_insensitive: false,
            password_min_length: MIN_PASSWORD_LENGTH,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let nickname_max_length = parse_var("NICKNAME_MAX_LENGTH")?
            .unwrap_or(DEFAULT_MAX_NICKNAME_LENGTH);

        let nickname_case_insensitive = env::var("NICKNAME_CASE_INSENSITIVE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let password_min_length =
            parse_var("PASSWORD_MIN_LENGTH")?.unwrap_or(MIN_PASSWORD_LENGTH);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            nickname_max_length,
            nickname_case_insensitive,
            password_min_length,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `nickname_max_length` is outside 3-255
    /// - `password_min_length` is outside 8-128
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !(MIN_NICKNAME_LENGTH..=MAX_NICKNAME_LENGTH_CEILING).contains(&self.nickname_max_length)
        {
            anyhow::bail!(
                "NICKNAME_MAX_LENGTH must be between {} and {}, got {}",
                MIN_NICKNAME_LENGTH,
                MAX_NICKNAME_LENGTH_CEILING,
                self.nickname_max_length
            );
        }

        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_MIN_LENGTH).contains(&self.password_min_length) {
            anyhow::bail!(
                "PASSWORD_MIN_LENGTH must be between {} and {}, got {}",
                MIN_PASSWORD_LENGTH,
                MAX_PASSWORD_MIN_LENGTH,
                self.password_min_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn nickname_policy(&self) -> NicknamePolicy {
        NicknamePolicy {
            max_length: self.nickname_max_length,
            case: if self.nickname_case_insensitive {
                CaseSensitivity::Insensitive
            } else {
                CaseSensitivity::Sensitive
            },
        }
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.password_min_length,
        }
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Nickname max length: {}", self.nickname_max_length);
        tracing::info!(
            "  Nickname uniqueness: {}",
            if self.nickname_case_insensitive {
                "case-insensitive"
            } else {
                "case-sensitive"
            }
        );
        tracing::info!("  Password min length: {}", self.password_min_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a positive integer, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// Expects `.env` to be loaded already (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
