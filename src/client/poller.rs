//! Settlement polling for `POST /payment/check`.
//!
//! The gateway settles payments asynchronously: a check issued right after
//! a successful payment can legitimately report zero settled payments.
//! The poller re-issues the check with backoff until a settlement shows up
//! or the attempt budget runs out. A zero count after the budget is a
//! normal "not settled yet" result, not an error.

use crate::retry::RetryPolicy;
use crate::schema::{PaymentCheckRequest, PaymentCheckResponse};
use crate::time::{Clock, Sleeper};
use crate::transport::HttpClient;

use super::{Client, Error};

const CHECK_PATH: &str = "/payment/check";

impl<H: HttpClient, S: Sleeper, C: Clock> Client<H, S, C> {
    /// Checks whether a payment has settled, polling with the configured
    /// check policy.
    ///
    /// Returns as soon as any attempt reports a settlement count greater
    /// than zero, or the last zero-count response once the budget is
    /// exhausted. Use [`PaymentCheckResponse::is_settled`] to tell the two
    /// apart.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when any single check fails past the
    /// executor's own recovery; "not settled yet" is not an error.
    pub async fn payment_check(
        &self,
        request: &PaymentCheckRequest,
    ) -> Result<PaymentCheckResponse, Error> {
        let policy = self.config.check.clone();
        self.payment_check_with(request, &policy).await
    }

    /// [`payment_check`](Self::payment_check) with a per-call polling
    /// policy.
    ///
    /// A policy with `max_retries = 0` performs exactly one check.
    pub async fn payment_check_with(
        &self,
        request: &PaymentCheckRequest,
        policy: &RetryPolicy,
    ) -> Result<PaymentCheckResponse, Error> {
        let body = serde_json::to_vec(request)?;

        let mut result: PaymentCheckResponse = self
            .execute_json(http::Method::POST, CHECK_PATH, Some(body.clone()))
            .await?;
        if result.is_settled() {
            return Ok(result);
        }

        let mut polls = 0;
        while policy.should_retry(polls) {
            polls += 1;
            let delay = policy.jittered_delay(polls - 1);
            tracing::warn!(
                "Payment not settled yet, checking again (attempt {polls}/{} after {delay:?})",
                policy.max_retries
            );
            self.sleeper.sleep(delay).await;

            result = self
                .execute_json(http::Method::POST, CHECK_PATH, Some(body.clone()))
                .await?;
            if result.is_settled() {
                break;
            }
        }

        Ok(result)
    }
}
