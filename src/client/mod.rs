//! The PayGate client: token lifecycle, resilient request execution,
//! settlement polling and the typed endpoint surface.
//!
//! This module provides:
//! - The client itself ([`Client`])
//! - Error types ([`Error`], [`GatewayError`])
//!
//! Internally the client is split into the authenticator (`token`), the
//! resilient executor (`executor`), the settlement poller (`poller`) and
//! the endpoint methods (`api`).

mod api;
mod error;
mod executor;
mod poller;
mod token;

#[cfg(test)]
mod api_tests;
#[cfg(test)]
mod support;

pub use error::{Error, GatewayError};

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::time::{SystemClock, TokioSleeper};
use crate::transport::ReqwestClient;

/// Asynchronous client for the PayGate v2 API.
///
/// The client handles authentication, token refresh, retry and settlement
/// polling, and exposes typed methods for the invoice, payment, receipt
/// and subscription endpoints.
///
/// One client instance owns one credential cache. It is safe to share a
/// single instance across tasks (e.g. behind an [`Arc`](std::sync::Arc)):
/// concurrent callers serialize their token exchanges, so an expired token
/// observed by many requests at once still results in a single exchange.
///
/// # Type Parameters
///
/// - `H`: The HTTP transport (defaults to [`ReqwestClient`])
/// - `S`: The sleeper used for retry/polling delays (defaults to
///   [`TokioSleeper`])
/// - `C`: The clock used for token-expiry checks (defaults to
///   [`SystemClock`])
///
/// # Example
///
/// ```no_run
/// use paygate_client::{Client, ClientConfig};
/// use paygate_client::schema::PaymentCheckRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::builder()
///     .username("MERCHANT_ID")
///     .password("MERCHANT_SECRET")
///     .build()?;
/// let client = Client::new(config);
///
/// let check = client
///     .payment_check(&PaymentCheckRequest::for_invoice("f8a63abc"))
///     .await?;
/// if check.is_settled() {
///     println!("paid: {:?}", check.paid_amount);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<H = ReqwestClient, S = TokioSleeper, C = SystemClock> {
    transport: H,
    sleeper: S,
    clock: C,
    config: ClientConfig,
    credentials: RwLock<Credentials>,
    /// Serializes authenticate/refresh exchanges; never held across
    /// data-plane sends.
    auth_lock: tokio::sync::Mutex<()>,
}

impl Client<ReqwestClient, TokioSleeper, SystemClock> {
    /// Creates a client with the production transport, sleeper and clock.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        tracing::debug!(
            base_url = %config.base_url,
            environment = ?config.environment,
            "PayGate client initialized"
        );
        Self {
            transport: ReqwestClient::new(),
            sleeper: TokioSleeper,
            clock: SystemClock,
            config,
            credentials: RwLock::new(Credentials::new()),
            auth_lock: tokio::sync::Mutex::new(()),
        }
    }
}

impl<H, S, C> Client<H, S, C> {
    /// Replaces the HTTP transport.
    ///
    /// This is primarily useful for testing with mock transports.
    #[must_use]
    pub fn with_transport<H2>(self, transport: H2) -> Client<H2, S, C> {
        Client {
            transport,
            sleeper: self.sleeper,
            clock: self.clock,
            config: self.config,
            credentials: self.credentials,
            auth_lock: self.auth_lock,
        }
    }

    /// Replaces the sleeper used for retry and polling delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Client<H, S2, C> {
        Client {
            transport: self.transport,
            sleeper,
            clock: self.clock,
            config: self.config,
            credentials: self.credentials,
            auth_lock: self.auth_lock,
        }
    }

    /// Replaces the clock used for token-expiry checks.
    ///
    /// This is primarily useful for testing token lifecycles with a
    /// controlled clock.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> Client<H, S, C2> {
        Client {
            transport: self.transport,
            sleeper: self.sleeper,
            clock,
            config: self.config,
            credentials: self.credentials,
            auth_lock: self.auth_lock,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Renders the HTTP Basic value for the configured merchant
    /// credentials.
    pub(crate) fn basic_auth_value(&self) -> String {
        let encoded = STANDARD.encode(format!(
            "{}:{}",
            self.config.username,
            self.config.password()
        ));
        format!("Basic {encoded}")
    }

    /// Credential state is only ever replaced wholesale, so a panic while
    /// holding the lock cannot leave it half-updated; recover the guard
    /// instead of propagating poisoning.
    pub(crate) fn credentials_read(&self) -> RwLockReadGuard<'_, Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn credentials_write(&self) -> RwLockWriteGuard<'_, Credentials> {
        self.credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
