//! Error type for request-shape validation.

use thiserror::Error;

/// Error type for cross-field request validation.
///
/// Raised before any network I/O when a request shape violates a rule the
/// gateway would reject anyway. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An invoice needs either a flat amount or at least one line.
    #[error("At least one of amount and lines must be set")]
    MissingAmountOrLines,

    /// Subscription invoices need an interval and a webhook URL.
    #[error("allow_subscribe requires subscription_interval and subscription_webhook")]
    SubscriptionFieldsRequired,

    /// Subscription invoices must carry at least one line.
    #[error("allow_subscribe requires at least one line")]
    SubscriptionLinesRequired,

    /// A subscription interval did not match the `<1-9999><D|W|M>` grammar.
    #[error("Invalid subscription interval '{0}': expected e.g. '30D', '2W' or '1M'")]
    InvalidInterval(String),

    /// A pagination field was outside its allowed range.
    #[error("Invalid offset: {field} must be {expected}, got {value}")]
    InvalidOffset {
        /// The offending field name.
        field: &'static str,
        /// The allowed range, human readable.
        expected: &'static str,
        /// The rejected value.
        value: u32,
    },
}
