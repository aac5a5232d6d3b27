//! Error types produced by the client.

use serde::Deserialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::schema::ValidationError;
use crate::transport::{HttpError, HttpResponse};

/// A structured error returned by the gateway.
///
/// Constructed from a 4xx/5xx response after all applicable recovery
/// (401 re-auth, 5xx retries) has been exhausted. Carries the HTTP status
/// and the server's machine error code so callers can branch on specific
/// failures, e.g. distinguishing "already paid" from "not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Gateway error: status_code {status}, error_key '{error_key}'")]
pub struct GatewayError {
    /// HTTP status of the failed exchange.
    pub status: http::StatusCode,
    /// Server-supplied machine error code; empty when the error body was
    /// absent or not JSON.
    pub error_key: String,
}

/// Error body shape the gateway uses for failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl GatewayError {
    /// Builds a gateway error from a failed response.
    ///
    /// A malformed or non-JSON error body degrades to an empty error key:
    /// a failure to decode the error report must never mask the original
    /// failure.
    #[must_use]
    pub fn classify(response: &HttpResponse) -> Self {
        let error_key = serde_json::from_slice::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();

        Self {
            status: response.status,
            error_key,
        }
    }
}

/// Error type for client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Local credential-state violation; never retried.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The gateway rejected the exchange after all applicable retries.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A request or response body could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request violated a cross-field rule; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A credential could not be rendered into an HTTP header.
    #[error("Credential contains bytes that cannot appear in an HTTP header")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
}

impl Error {
    /// Returns the gateway status code when this error is a gateway error.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Gateway(gateway) => Some(gateway.status),
            _ => None,
        }
    }
}
