//! Cached bearer/refresh token pair and expiry bookkeeping.

use std::time::{Duration, SystemTime};

use crate::schema::TokenResponse;

use super::AuthError;

/// Which cached token to render into an Authorization header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The short-lived access token.
    Access,
    /// The longer-lived refresh token.
    Refresh,
}

/// Cached authentication state for one client instance.
///
/// Holds the current access/refresh token pair, their absolute expiry
/// times, and the fields the token endpoint echoes back. All token fields
/// are replaced together by [`apply`](Self::apply) after a successful
/// exchange; there is no partial update.
///
/// Expiry queries take `now` from the caller (supplied by a
/// [`Clock`](crate::time::Clock)) so they stay deterministic in tests, and
/// compare against `now + leeway`: a token inside its leeway window is
/// already treated as expired, which makes refresh happen before the server
/// would start rejecting it.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    token_type: String,
    access_token: Option<String>,
    access_expires_at: Option<SystemTime>,
    refresh_token: Option<String>,
    refresh_expires_at: Option<SystemTime>,
    scope: String,
    session_state: String,
    not_before_policy: String,
}

/// Normalizes a server-supplied token type to title case.
///
/// The gateway has been observed returning `"bearer"`, `"BEARER"` and
/// `"Bearer"` across environments; headers are always rendered with the
/// canonical capitalized form.
fn normalize_token_type(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut normalized: String = first.to_uppercase().collect();
        normalized.push_str(&chars.as_str().to_lowercase());
        normalized
    })
}

impl Credentials {
    /// Creates empty credentials (no token obtained yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an access token has ever been set.
    #[must_use]
    pub const fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns the cached access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] if no token has been set yet.
    pub fn access_token(&self) -> Result<&str, AuthError> {
        self.access_token
            .as_deref()
            .ok_or(AuthError::NotAuthenticated)
    }

    /// Returns true if the access token is expired as of `now + leeway`.
    ///
    /// Credentials that were never populated are always expired.
    #[must_use]
    pub fn is_access_expired(&self, now: SystemTime, leeway: Duration) -> bool {
        self.access_expires_at
            .is_none_or(|expires_at| now + leeway >= expires_at)
    }

    /// Returns true if the refresh token is expired as of `now + leeway`.
    ///
    /// Credentials that were never populated are always expired.
    #[must_use]
    pub fn is_refresh_expired(&self, now: SystemTime, leeway: Duration) -> bool {
        self.refresh_expires_at
            .is_none_or(|expires_at| now + leeway >= expires_at)
    }

    /// Renders the requested token as an `Authorization` header value,
    /// e.g. `"Bearer eyJhb…"`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when the access token is
    /// requested but absent, and [`AuthError::MissingRefreshToken`] when the
    /// refresh token is requested but absent.
    pub fn authorization_header(&self, kind: TokenKind) -> Result<String, AuthError> {
        let token = match kind {
            TokenKind::Access => self.access_token()?,
            TokenKind::Refresh => self
                .refresh_token
                .as_deref()
                .ok_or(AuthError::MissingRefreshToken)?,
        };
        Ok(format!("{} {token}", self.token_type))
    }

    /// Returns the scope granted by the last exchange.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the session state echoed by the last exchange.
    #[must_use]
    pub fn session_state(&self) -> &str {
        &self.session_state
    }

    /// Replaces the full credential state from a successful token exchange.
    ///
    /// Expiry times are computed as `issued_at` plus the server-supplied
    /// lifetimes (in seconds). All fields change together; readers observing
    /// this state through a lock always see one exchange's result, never a
    /// mix of two.
    pub fn apply(&mut self, token: &TokenResponse, issued_at: SystemTime) {
        self.token_type = normalize_token_type(&token.token_type);
        self.access_token = Some(token.access_token.clone());
        self.access_expires_at = Some(issued_at + lifetime(token.expires_in));
        self.refresh_token = Some(token.refresh_token.clone());
        self.refresh_expires_at = Some(issued_at + lifetime(token.refresh_expires_in));
        self.scope = token.scope.clone();
        self.session_state = token.session_state.clone();
        self.not_before_policy = token.not_before_policy.clone();
    }
}

/// Converts a server-supplied lifetime in seconds to a duration.
///
/// Negative or non-finite lifetimes collapse to zero, leaving the token
/// immediately expired rather than panicking on bad server data.
fn lifetime(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}
