//! Resilient request execution.
//!
//! Every authenticated call goes through [`Client::execute`], which applies
//! the recovery policies in order:
//!
//! 1. attach the current bearer token (acquiring or refreshing it first if
//!    needed) and send;
//! 2. on 401, force one refresh exchange and resend exactly once — the
//!    server has declared the credential stale, so local expiry checks do
//!    not apply;
//! 3. on a server error (5xx), retry with exponential backoff and jitter
//!    up to the configured budget, stopping at the first success;
//! 4. anything still failing is classified into a [`GatewayError`].
//!
//! 401 and 5xx get different treatment because they fail for different
//! reasons: a 401 means the credential is stale and one corrective refresh
//! normally fixes it, while a 5xx means transient server trouble where
//! repeated attempts help and the credential is not the problem.

use http::HeaderValue;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use url::Url;

use crate::auth::TokenKind;
use crate::time::{Clock, Sleeper};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::{Client, Error, GatewayError};

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");
const CLIENT_USER_AGENT: HeaderValue = HeaderValue::from_static("paygate-client/0.2");

impl<H: HttpClient, S: Sleeper, C: Clock> Client<H, S, C> {
    /// Resolves an endpoint path against the configured base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let raw = format!("{base}{path}");
        Url::parse(&raw).map_err(|e| HttpError::InvalidUrl(format!("{raw}: {e}")).into())
    }

    /// Executes one logical authenticated request against the gateway.
    ///
    /// Returns the successful response for typed decoding by the caller;
    /// all failure handling described in the module docs happens here.
    pub(crate) async fn execute(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, Error> {
        let url = self.endpoint_url(path)?;
        let mut request = HttpRequest::new(method.clone(), url)
            .with_header(ACCEPT, APPLICATION_JSON)
            .with_header(CONTENT_TYPE, APPLICATION_JSON)
            .with_header(USER_AGENT, CLIENT_USER_AGENT)
            .with_timeout(self.config.timeout);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let authorization = self.authorization_value().await?;
        request.set_header(AUTHORIZATION, HeaderValue::from_str(&authorization)?);

        let mut response = self.transport.request(request.clone()).await?;

        if response.status == http::StatusCode::UNAUTHORIZED {
            self.force_refresh().await?;
            let refreshed = self
                .credentials_read()
                .authorization_header(TokenKind::Access)?;
            request.set_header(AUTHORIZATION, HeaderValue::from_str(&refreshed)?);
            response = self.transport.request(request).await?;
        } else if response.is_server_error() {
            let policy = &self.config.retry;
            let mut retries = 0;
            while policy.should_retry(retries) {
                retries += 1;
                let delay = policy.jittered_delay(retries - 1);
                tracing::warn!(
                    "Retrying {method} {path} (attempt {retries}/{} after {delay:?})",
                    policy.max_retries
                );
                self.sleeper.sleep(delay).await;

                response = self.transport.request(request.clone()).await?;
                if response.is_success() {
                    break;
                }
            }
        }

        if response.is_success() {
            Ok(response)
        } else {
            let error = GatewayError::classify(&response);
            tracing::error!("{method} {path} failed: {error}");
            Err(error.into())
        }
    }

    /// Executes a request and decodes the response body into `T`.
    pub(crate) async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, Error> {
        let response = self.execute(method, path, body).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}
