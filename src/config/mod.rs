//! Configuration layer for the PayGate client.
//!
//! This module provides:
//! - Environment selection ([`Environment`])
//! - Validated client configuration ([`ClientConfig`], [`ClientConfigBuilder`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Environment-variable loading (`PAYGATE_*`)
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit builder calls** - Values set programmatically
//! 2. **TOML config file / environment variables** - Whichever source the
//!    config was loaded from
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Credentials (`username`, `password`) have no defaults and must be
//! supplied by one of the sources; everything else defaults sensibly for
//! the sandbox environment.
//!
//! All validation happens in [`ClientConfigBuilder::build`]: an invalid
//! combination fails at construction time with a [`ConfigError`], never at
//! call time.

pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use error::ConfigError;
pub use toml::TomlConfig;
pub use validated::{ClientConfig, ClientConfigBuilder, Environment};
