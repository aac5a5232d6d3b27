//! Built-in default values for client configuration.

use std::time::Duration;

/// Sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.paygate.dev/v2";

/// Production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://api.paygate.dev/v2";

/// Default per-request timeout.
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Default token-expiry leeway: tokens are refreshed this long before they
/// actually expire.
pub const TOKEN_LEEWAY: Duration = Duration::from_secs(60);

/// Prefix for environment-variable configuration.
pub const ENV_PREFIX: &str = "PAYGATE_";
