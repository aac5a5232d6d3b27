//! Validated client configuration.
//!
//! This module contains the final, validated configuration consumed by the
//! client. All validation is performed during construction; an invalid
//! combination of parameters never survives past
//! [`ClientConfigBuilder::build`].

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::retry::RetryPolicy;

use super::defaults;
use super::error::ConfigError;
use super::toml::{TomlConfig, TomlRetry};

/// Which gateway environment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// The merchant sandbox; credentials and money are both fake.
    #[default]
    Sandbox,
    /// The production gateway.
    Production,
}

impl Environment {
    /// Returns the base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => defaults::SANDBOX_BASE_URL,
            Self::Production => defaults::PRODUCTION_BASE_URL,
        }
    }
}

/// Fully validated configuration ready for use by the client.
///
/// # Construction
///
/// Use [`ClientConfig::builder`] for programmatic construction,
/// [`ClientConfig::from_toml_file`] for file-based configuration, or
/// [`ClientConfig::from_env`] for `PAYGATE_*` environment variables.
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant username (required).
    pub username: String,

    /// Merchant password (required). Redacted from `Debug` output.
    pub(crate) password: String,

    /// Selected gateway environment.
    pub environment: Environment,

    /// Resolved API base URL.
    pub base_url: Url,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Token-expiry leeway: tokens are treated as expired this long before
    /// they actually are.
    pub token_leeway: Duration,

    /// Retry policy for server errors on any request.
    pub retry: RetryPolicy,

    /// Polling policy for payment-settlement checks.
    pub check: RetryPolicy,
}

impl ClientConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file cannot be read or parsed, or
    /// when the resulting configuration is invalid.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = TomlConfig::from_file(path)?;
        ClientConfigBuilder::default().merge_toml(raw).build()
    }

    /// Loads configuration from `PAYGATE_*` environment variables.
    ///
    /// Recognized variables: `PAYGATE_USERNAME`, `PAYGATE_PASSWORD`,
    /// `PAYGATE_SANDBOX`, `PAYGATE_BASE_URL`, `PAYGATE_TIMEOUT_SECS`,
    /// `PAYGATE_TOKEN_LEEWAY_SECS`, `PAYGATE_RETRIES`,
    /// `PAYGATE_RETRY_DELAY_MS`, `PAYGATE_RETRY_JITTER_MS`,
    /// `PAYGATE_CHECK_RETRIES`, `PAYGATE_CHECK_DELAY_MS`,
    /// `PAYGATE_CHECK_JITTER_MS`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable holds an unparseable value
    /// or the resulting configuration is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_lookup(|name| std::env::var(name).ok())
    }

    /// Environment loading with an injectable variable source, so tests do
    /// not have to mutate process-wide environment state.
    pub(crate) fn from_env_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        ClientConfigBuilder::default().merge_env(lookup)?.build()
    }

    /// Returns the merchant password.
    #[must_use]
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("token_leeway", &self.token_leeway)
            .field("retry", &self.retry)
            .field("check", &self.check)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    username: Option<String>,
    password: Option<String>,
    environment: Option<Environment>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    token_leeway: Option<Duration>,
    retry: Option<RetryPolicy>,
    check: Option<RetryPolicy>,
}

impl ClientConfigBuilder {
    /// Sets the merchant username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the merchant password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Selects the environment explicitly.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Selects sandbox (`true`) or production (`false`).
    #[must_use]
    pub const fn sandbox(self, sandbox: bool) -> Self {
        self.environment(if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        })
    }

    /// Overrides the base URL, taking precedence over the environment
    /// selection.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the token-expiry leeway.
    #[must_use]
    pub const fn token_leeway(mut self, leeway: Duration) -> Self {
        self.token_leeway = Some(leeway);
        self
    }

    /// Sets the server-error retry policy.
    #[must_use]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Sets the settlement-check polling policy.
    #[must_use]
    pub fn check(mut self, check: RetryPolicy) -> Self {
        self.check = Some(check);
        self
    }

    /// Fills unset fields from a parsed TOML file.
    #[must_use]
    pub fn merge_toml(mut self, raw: TomlConfig) -> Self {
        self.username = self.username.or(raw.username);
        self.password = self.password.or(raw.password);
        if self.environment.is_none() {
            self.environment = raw.sandbox.map(|sandbox| {
                if sandbox {
                    Environment::Sandbox
                } else {
                    Environment::Production
                }
            });
        }
        self.base_url = self.base_url.or(raw.base_url);
        if self.timeout.is_none() {
            self.timeout = raw.timeout_secs.map(Duration::from_secs);
        }
        if self.token_leeway.is_none() {
            self.token_leeway = raw.token_leeway_secs.map(Duration::from_secs);
        }
        if self.retry.is_none() {
            self.retry = raw.retry.map(merge_retry);
        }
        if self.check.is_none() {
            self.check = raw.check.map(merge_retry);
        }
        self
    }

    /// Fills unset fields from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a variable holds an
    /// unparseable value.
    pub(crate) fn merge_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let var = |suffix: &str| lookup(&format!("{}{suffix}", defaults::ENV_PREFIX));

        self.username = self.username.or_else(|| var("USERNAME"));
        self.password = self.password.or_else(|| var("PASSWORD"));

        if self.environment.is_none() {
            if let Some(raw) = var("SANDBOX") {
                self.environment = Some(if parse_env_bool("PAYGATE_SANDBOX", &raw)? {
                    Environment::Sandbox
                } else {
                    Environment::Production
                });
            }
        }
        self.base_url = self.base_url.or_else(|| var("BASE_URL"));

        if self.timeout.is_none() {
            if let Some(raw) = var("TIMEOUT_SECS") {
                self.timeout = Some(Duration::from_secs(parse_env_u64(
                    "PAYGATE_TIMEOUT_SECS",
                    &raw,
                )?));
            }
        }
        if self.token_leeway.is_none() {
            if let Some(raw) = var("TOKEN_LEEWAY_SECS") {
                self.token_leeway = Some(Duration::from_secs(parse_env_u64(
                    "PAYGATE_TOKEN_LEEWAY_SECS",
                    &raw,
                )?));
            }
        }

        if self.retry.is_none() {
            self.retry = env_retry_policy(&lookup, "RETRIES", "RETRY_DELAY_MS", "RETRY_JITTER_MS")?;
        }
        if self.check.is_none() {
            self.check =
                env_retry_policy(&lookup, "CHECK_RETRIES", "CHECK_DELAY_MS", "CHECK_JITTER_MS")?;
        }

        Ok(self)
    }

    /// Validates the collected values and produces a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when credentials are missing, the base URL
    /// does not parse, or the timeout is zero.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ConfigError::missing("username", "Provide the merchant username"))?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ConfigError::missing("password", "Provide the merchant password"))?;

        let environment = self.environment.unwrap_or_default();
        let raw_base_url = self
            .base_url
            .unwrap_or_else(|| environment.base_url().to_string());
        let base_url = Url::parse(&raw_base_url).map_err(|e| ConfigError::InvalidUrl {
            url: raw_base_url,
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot serve as a base for endpoint paths".to_string(),
            });
        }

        let timeout = self.timeout.unwrap_or(defaults::TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(ClientConfig {
            username,
            password,
            environment,
            base_url,
            timeout,
            token_leeway: self.token_leeway.unwrap_or(defaults::TOKEN_LEEWAY),
            retry: self.retry.unwrap_or_default(),
            check: self.check.unwrap_or_default(),
        })
    }
}

fn merge_retry(raw: TomlRetry) -> RetryPolicy {
    let mut policy = RetryPolicy::default();
    if let Some(max_retries) = raw.max_retries {
        policy = policy.with_max_retries(max_retries);
    }
    if let Some(ms) = raw.base_delay_ms {
        policy = policy.with_base_delay(Duration::from_millis(ms));
    }
    if let Some(ms) = raw.max_delay_ms {
        policy = policy.with_max_delay(Duration::from_millis(ms));
    }
    if let Some(multiplier) = raw.multiplier {
        policy = policy.with_multiplier(multiplier);
    }
    if let Some(ms) = raw.jitter_ms {
        policy = policy.with_jitter(Duration::from_millis(ms));
    }
    policy
}

fn env_retry_policy(
    lookup: impl Fn(&str) -> Option<String>,
    retries: &str,
    delay_ms: &str,
    jitter_ms: &str,
) -> Result<Option<RetryPolicy>, ConfigError> {
    let var = |suffix: &str| lookup(&format!("{}{suffix}", defaults::ENV_PREFIX));

    let raw_retries = var(retries);
    let raw_delay = var(delay_ms);
    let raw_jitter = var(jitter_ms);
    if raw_retries.is_none() && raw_delay.is_none() && raw_jitter.is_none() {
        return Ok(None);
    }

    let mut policy = RetryPolicy::default();
    if let Some(raw) = raw_retries {
        let name = format!("{}{retries}", defaults::ENV_PREFIX);
        policy = policy.with_max_retries(parse_env_u32(&name, &raw)?);
    }
    if let Some(raw) = raw_delay {
        let name = format!("{}{delay_ms}", defaults::ENV_PREFIX);
        policy = policy.with_base_delay(Duration::from_millis(parse_env_u64(&name, &raw)?));
    }
    if let Some(raw) = raw_jitter {
        let name = format!("{}{jitter_ms}", defaults::ENV_PREFIX);
        policy = policy.with_jitter(Duration::from_millis(parse_env_u64(&name, &raw)?));
    }
    Ok(Some(policy))
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{raw}'"),
        }),
    }
}

fn parse_env_u64(name: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("expected an integer, got '{raw}'"),
    })
}

fn parse_env_u32(name: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("expected an integer, got '{raw}'"),
    })
}
