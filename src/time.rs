//! Time abstractions for testability.
//!
//! This module provides a [`Clock`] trait for querying the current time and a
//! [`Sleeper`] trait for waiting out backoff delays. Production code uses
//! [`SystemClock`] and [`TokioSleeper`]; tests inject mock clocks and
//! [`InstantSleeper`] so token-expiry and retry behavior can be exercised
//! without real waiting.

use std::time::{Duration, SystemTime};

/// Abstraction over system time for testability.
///
/// Implementations provide the current time, allowing tests to inject
/// controlled time values instead of relying on actual system time.
///
/// # Example
///
/// ```
/// use paygate_client::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock using actual system time.
///
/// This is the default clock implementation that delegates to
/// [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Abstraction over delay waiting for testability.
///
/// Retry and polling loops sleep through this trait so tests can replace
/// real delays with [`InstantSleeper`]. Sleeping suspends only the calling
/// task; other requests against the same client proceed concurrently.
pub trait Sleeper: Send + Sync {
    /// Waits for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately without waiting.
///
/// Intended for tests that exercise retry and polling logic where real
/// delays would only slow the suite down.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
