//! Token lifecycle: acquisition, proactive refresh and 401 recovery.
//!
//! Both exchanges talk to the transport directly rather than through the
//! resilient executor: a token exchange must never trigger another token
//! exchange, and a failed login is fatal to the calling operation anyway.

use http::HeaderValue;
use http::header::{ACCEPT, AUTHORIZATION};

use crate::auth::TokenKind;
use crate::schema::TokenResponse;
use crate::time::{Clock, Sleeper};
use crate::transport::{HttpClient, HttpRequest};

use super::{Client, Error, GatewayError};

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

impl<H: HttpClient, S: Sleeper, C: Clock> Client<H, S, C> {
    /// Returns a ready-to-send `Authorization` header value, performing
    /// whatever exchange the cached credential state requires:
    ///
    /// 1. no token yet, or refresh token expired → full authenticate;
    /// 2. access token expired → refresh;
    /// 3. otherwise → the cached token, unchanged.
    ///
    /// Expiry is always judged against `now + leeway`, so exchanges happen
    /// before the server would start rejecting the token.
    pub(crate) async fn authorization_value(&self) -> Result<String, Error> {
        let leeway = self.config.token_leeway;
        let now = self.clock.now();

        // Fast path: a live token needs no lock at all.
        {
            let creds = self.credentials_read();
            if creds.has_access_token()
                && !creds.is_refresh_expired(now, leeway)
                && !creds.is_access_expired(now, leeway)
            {
                return Ok(creds.authorization_header(TokenKind::Access)?);
            }
        }

        let _guard = self.auth_lock.lock().await;

        // Re-check under the lock: another caller may have completed an
        // exchange while we waited for it.
        let now = self.clock.now();
        let (missing, refresh_expired, access_expired) = {
            let creds = self.credentials_read();
            (
                !creds.has_access_token(),
                creds.is_refresh_expired(now, leeway),
                creds.is_access_expired(now, leeway),
            )
        };

        if missing || refresh_expired {
            self.authenticate().await?;
        } else if access_expired {
            self.refresh_access_token(false).await?;
        }

        Ok(self
            .credentials_read()
            .authorization_header(TokenKind::Access)?)
    }

    /// Refreshes in response to a 401, bypassing the local expiry check:
    /// the server has already declared the token stale.
    pub(crate) async fn force_refresh(&self) -> Result<(), Error> {
        let _guard = self.auth_lock.lock().await;
        self.refresh_access_token(true).await
    }

    /// Performs the full credential exchange at `POST /auth/token`.
    ///
    /// A failed login is surfaced as a [`GatewayError`]; there is nothing
    /// left to fall back to.
    ///
    /// Caller must hold `auth_lock`.
    async fn authenticate(&self) -> Result<(), Error> {
        tracing::debug!("Authenticating with merchant credentials");

        let url = self.endpoint_url("/auth/token")?;
        let request = HttpRequest::post(url)
            .with_header(ACCEPT, APPLICATION_JSON)
            .with_header(AUTHORIZATION, HeaderValue::from_str(&self.basic_auth_value())?)
            .with_timeout(self.config.timeout);

        let response = self.transport.request(request).await?;
        if !response.is_success() {
            let error = GatewayError::classify(&response);
            tracing::error!("Authentication failed: {error}");
            return Err(error.into());
        }

        let token: TokenResponse = serde_json::from_slice(&response.body)?;
        self.credentials_write().apply(&token, self.clock.now());
        Ok(())
    }

    /// Exchanges the refresh token for a new token pair at
    /// `POST /auth/refresh`.
    ///
    /// Unless `force` is set, this is a no-op when the access token turns
    /// out not to be expired after all — the caller raced another refresh
    /// and lost, which is fine. A refresh with an expired (or missing)
    /// refresh token, and a refresh the server rejects, both fall back to
    /// the full credential exchange: refresh failure is never fatal while
    /// authentication from scratch can still succeed.
    ///
    /// Caller must hold `auth_lock`.
    async fn refresh_access_token(&self, force: bool) -> Result<(), Error> {
        let leeway = self.config.token_leeway;
        let now = self.clock.now();

        let (access_expired, refresh_expired, refresh_header) = {
            let creds = self.credentials_read();
            (
                creds.is_access_expired(now, leeway),
                creds.is_refresh_expired(now, leeway),
                creds.authorization_header(TokenKind::Refresh),
            )
        };

        if !force && !access_expired {
            return Ok(());
        }
        if refresh_expired {
            return self.authenticate().await;
        }
        let Ok(refresh_header) = refresh_header else {
            return self.authenticate().await;
        };

        let url = self.endpoint_url("/auth/refresh")?;
        let request = HttpRequest::post(url)
            .with_header(ACCEPT, APPLICATION_JSON)
            .with_header(AUTHORIZATION, HeaderValue::from_str(&refresh_header)?)
            .with_timeout(self.config.timeout);

        let response = self.transport.request(request).await?;
        if response.is_success() {
            let token: TokenResponse = serde_json::from_slice(&response.body)?;
            self.credentials_write().apply(&token, self.clock.now());
            Ok(())
        } else {
            tracing::warn!(
                status = %response.status,
                "Refresh exchange rejected, falling back to full authentication"
            );
            self.authenticate().await
        }
    }
}
