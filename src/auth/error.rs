//! Error type for local credential-state violations.

use thiserror::Error;

/// Error type for local credential-state violations.
///
/// These are sequencing faults on the caller's side (or the client's own
/// bookkeeping), not remote failures: they are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A token was requested before any authentication succeeded.
    #[error("No access token has been obtained yet")]
    NotAuthenticated,

    /// A refresh was attempted without a cached refresh token.
    #[error("No refresh token has been obtained yet")]
    MissingRefreshToken,
}
