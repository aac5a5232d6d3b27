//! TOML configuration file parsing.
//!
//! All fields are optional at this layer; requiredness and range checks
//! happen when the parsed file is merged into a
//! [`ClientConfigBuilder`](super::ClientConfigBuilder).

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Raw, unvalidated configuration as read from a TOML file.
///
/// # Example file
///
/// ```toml
/// username = "MERCHANT_ID"
/// password = "MERCHANT_SECRET"
/// sandbox = true
/// timeout_secs = 10
/// token_leeway_secs = 60
///
/// [retry]
/// max_retries = 5
/// base_delay_ms = 500
/// jitter_ms = 500
///
/// [check]
/// max_retries = 5
/// base_delay_ms = 500
/// jitter_ms = 500
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Merchant username.
    pub username: Option<String>,
    /// Merchant password.
    pub password: Option<String>,
    /// Use the sandbox environment (default true).
    pub sandbox: Option<bool>,
    /// Explicit base URL override.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Token-expiry leeway in seconds.
    pub token_leeway_secs: Option<u64>,
    /// Retry policy for server errors.
    pub retry: Option<TomlRetry>,
    /// Polling policy for settlement checks.
    pub check: Option<TomlRetry>,
}

/// Raw retry/polling policy section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlRetry {
    /// Extra attempts after the initial one.
    pub max_retries: Option<u32>,
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: Option<u64>,
    /// Cap on the computed delay, in milliseconds.
    pub max_delay_ms: Option<u64>,
    /// Exponential backoff multiplier.
    pub multiplier: Option<f64>,
    /// Jitter upper bound, in milliseconds.
    pub jitter_ms: Option<u64>,
}

impl TomlConfig {
    /// Parses a TOML configuration string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlParse`] when the content is not valid
    /// TOML or contains unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] when the file cannot be read and
    /// [`ConfigError::TomlParse`] when its content is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}
