//! Token exchange payload.

use serde::{Deserialize, Serialize};

/// Payload returned by both `POST /auth/token` and `POST /auth/refresh`.
///
/// Lifetimes are in seconds from the moment the exchange succeeded;
/// `not-before-policy` and `session_state` are echoed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Token scheme, e.g. `"bearer"`; case varies by environment.
    pub token_type: String,
    /// The access token itself.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: f64,
    /// The refresh token paired with this access token.
    pub refresh_token: String,
    /// Refresh token lifetime in seconds.
    pub refresh_expires_in: f64,
    /// Scope granted to the credential.
    pub scope: String,
    /// Server pass-through field.
    #[serde(rename = "not-before-policy")]
    pub not_before_policy: String,
    /// Server pass-through field.
    pub session_state: String,
}
