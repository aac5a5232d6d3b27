//! Retry policy configuration for request execution and settlement polling.

use std::time::Duration;

/// Configuration for exponential backoff retry behavior.
///
/// Controls how many extra attempts to make after a failed (or not yet
/// settled) attempt and how long to wait between them. Delays grow
/// exponentially with a configurable multiplier, are capped at a maximum,
/// and carry a uniformly-random jitter term so concurrent clients do not
/// retry in lockstep.
///
/// The same policy type drives both the server-error retry loop and the
/// payment-settlement polling loop; the client configuration holds an
/// independent instance for each.
///
/// # Defaults
///
/// - `max_retries`: 5
/// - `base_delay`: 500 milliseconds
/// - `max_delay`: 60 seconds
/// - `multiplier`: 2.0
/// - `jitter`: 500 milliseconds
///
/// # Example
///
/// ```
/// use paygate_client::RetryPolicy;
/// use std::time::Duration;
///
/// // Create with defaults
/// let policy = RetryPolicy::default();
///
/// // Or customize via builder
/// let custom = RetryPolicy::new()
///     .with_max_retries(3)
///     .with_base_delay(Duration::from_secs(1))
///     .with_max_delay(Duration::from_secs(30))
///     .with_jitter(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    ///
    /// A value of 0 means no retries; only the initial attempt is made.
    pub max_retries: u32,

    /// Delay before the first retry.
    ///
    /// Subsequent delays are computed by multiplying by `multiplier`.
    pub base_delay: Duration,

    /// Maximum delay between retries.
    ///
    /// The computed delay is capped at this value (before jitter) to
    /// prevent excessively long waits.
    pub max_delay: Duration,

    /// Multiplier applied to the delay after each retry.
    ///
    /// A value of 2.0 doubles the delay each time.
    pub multiplier: f64,

    /// Upper bound of the uniformly-random jitter added to every delay.
    pub jitter: Duration,
}

impl RetryPolicy {
    /// Default maximum retries.
    pub const DEFAULT_MAX_RETRIES: u32 = 5;

    /// Default base delay (500 milliseconds).
    pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

    /// Default maximum delay (60 seconds).
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

    /// Default multiplier (2.0).
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Default jitter bound (500 milliseconds).
    pub const DEFAULT_JITTER: Duration = Duration::from_millis(500);

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: Self::DEFAULT_MAX_RETRIES,
            base_delay: Self::DEFAULT_BASE_DELAY,
            max_delay: Self::DEFAULT_MAX_DELAY,
            multiplier: Self::DEFAULT_MULTIPLIER,
            jitter: Self::DEFAULT_JITTER,
        }
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self::new().with_max_retries(0)
    }

    /// Sets the maximum number of retries after the initial attempt.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay before the first retry.
    ///
    /// Zero delay is supported (useful for testing with [`InstantSleeper`])
    /// but not recommended for production as it creates a tight retry loop.
    ///
    /// [`InstantSleeper`]: crate::time::InstantSleeper
    #[must_use]
    pub const fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the delay multiplier.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is not positive (must be > 0.0).
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        assert!(multiplier > 0.0, "multiplier must be positive");
        self.multiplier = multiplier;
        self
    }

    /// Sets the jitter upper bound.
    #[must_use]
    pub const fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Computes the deterministic delay for a given retry number (0-indexed).
    ///
    /// # Arguments
    ///
    /// * `retry` - The retry number (0 = delay before first retry, 1 = delay
    ///   before second retry, etc.)
    ///
    /// # Returns
    ///
    /// `base_delay * multiplier^retry`, capped at `max_delay`. Jitter is not
    /// included; see [`jittered_delay`](Self::jittered_delay).
    #[must_use]
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        // Safe cast: retry values are small (typically < 20) and i32::MAX is ~2 billion
        #[allow(clippy::cast_possible_wrap)]
        let multiplier = self.multiplier.powi(retry as i32);
        let delay_secs = self.base_delay.as_secs_f64() * multiplier;
        let capped = delay_secs.min(self.max_delay.as_secs_f64());
        Duration::from_secs_f64(capped)
    }

    /// Computes the delay for a retry including a random jitter term.
    ///
    /// The jitter is sampled uniformly from `[0, jitter)` and added on top
    /// of [`delay_for_retry`](Self::delay_for_retry).
    #[must_use]
    pub fn jittered_delay(&self, retry: u32) -> Duration {
        let jitter_secs = rand::random::<f64>() * self.jitter.as_secs_f64();
        self.delay_for_retry(retry) + Duration::from_secs_f64(jitter_secs)
    }

    /// Returns true if another retry is allowed after `retries_done` retries.
    #[must_use]
    pub const fn should_retry(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
