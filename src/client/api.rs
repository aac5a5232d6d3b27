//! Typed endpoint methods.
//!
//! Each method serializes its request (omitting absent optional fields),
//! runs it through the resilient executor and decodes the typed response.
//! Cancel and refund endpoints return the HTTP status code; everything
//! else returns a typed shape.

use http::Method;

use crate::schema::{
    InvoiceCreateRequest, InvoiceCreateResponse, InvoiceCreateSimpleRequest, InvoiceGetResponse,
    PaymentCancelRequest, PaymentGetResponse, PaymentListRequest, PaymentListResponse,
    PaymentRefundRequest, Receipt, ReceiptCreateRequest, SubscriptionGetResponse,
};
use crate::time::{Clock, Sleeper};
use crate::transport::HttpClient;

use super::{Client, Error};

impl<H: HttpClient, S: Sleeper, C: Clock> Client<H, S, C> {
    /// `POST /invoice` — creates an invoice with the full feature surface.
    ///
    /// Validates the request's cross-field rules before sending anything.
    pub async fn invoice_create(
        &self,
        request: &InvoiceCreateRequest,
    ) -> Result<InvoiceCreateResponse, Error> {
        request.validate()?;
        let body = serde_json::to_vec(request)?;
        self.execute_json(Method::POST, "/invoice", Some(body)).await
    }

    /// `POST /invoice` — creates an invoice with a flat amount.
    pub async fn invoice_create_simple(
        &self,
        request: &InvoiceCreateSimpleRequest,
    ) -> Result<InvoiceCreateResponse, Error> {
        let body = serde_json::to_vec(request)?;
        self.execute_json(Method::POST, "/invoice", Some(body)).await
    }

    /// `GET /invoice/{id}` — fetches an invoice.
    pub async fn invoice_get(&self, invoice_id: &str) -> Result<InvoiceGetResponse, Error> {
        self.execute_json(Method::GET, &format!("/invoice/{invoice_id}"), None)
            .await
    }

    /// `DELETE /invoice/{id}` — cancels an unpaid invoice. Returns the
    /// HTTP status code.
    pub async fn invoice_cancel(&self, invoice_id: &str) -> Result<http::StatusCode, Error> {
        let response = self
            .execute(Method::DELETE, &format!("/invoice/{invoice_id}"), None)
            .await?;
        Ok(response.status)
    }

    /// `GET /payment/{id}` — fetches a payment.
    pub async fn payment_get(&self, payment_id: &str) -> Result<PaymentGetResponse, Error> {
        self.execute_json(Method::GET, &format!("/payment/{payment_id}"), None)
            .await
    }

    /// `DELETE /payment/cancel/{id}` — cancels a payment. Returns the HTTP
    /// status code.
    pub async fn payment_cancel(
        &self,
        payment_id: &str,
        request: &PaymentCancelRequest,
    ) -> Result<http::StatusCode, Error> {
        let body = serde_json::to_vec(request)?;
        let response = self
            .execute(
                Method::DELETE,
                &format!("/payment/cancel/{payment_id}"),
                Some(body),
            )
            .await?;
        Ok(response.status)
    }

    /// `DELETE /payment/refund/{id}` — refunds a payment. Returns the HTTP
    /// status code.
    pub async fn payment_refund(
        &self,
        payment_id: &str,
        request: &PaymentRefundRequest,
    ) -> Result<http::StatusCode, Error> {
        let body = serde_json::to_vec(request)?;
        let response = self
            .execute(
                Method::DELETE,
                &format!("/payment/refund/{payment_id}"),
                Some(body),
            )
            .await?;
        Ok(response.status)
    }

    /// `POST /payment/list` — lists payments for an object in a date
    /// range.
    pub async fn payment_list(
        &self,
        request: &PaymentListRequest,
    ) -> Result<PaymentListResponse, Error> {
        let body = serde_json::to_vec(request)?;
        self.execute_json(Method::POST, "/payment/list", Some(body))
            .await
    }

    /// `POST /receipt/create` — issues a tax e-receipt for a settled
    /// payment.
    pub async fn receipt_create(&self, request: &ReceiptCreateRequest) -> Result<Receipt, Error> {
        let body = serde_json::to_vec(request)?;
        self.execute_json(Method::POST, "/receipt/create", Some(body))
            .await
    }

    /// `GET /receipt/{id}` — fetches a previously issued e-receipt.
    pub async fn receipt_get(&self, receipt_id: &str) -> Result<Receipt, Error> {
        self.execute_json(Method::GET, &format!("/receipt/{receipt_id}"), None)
            .await
    }

    /// `GET /subscription/{id}` — fetches a subscription with its invoice
    /// and payment history.
    pub async fn subscription_get(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionGetResponse, Error> {
        self.execute_json(Method::GET, &format!("/subscription/{subscription_id}"), None)
            .await
    }

    /// `DELETE /subscription/{id}` — cancels a subscription. Returns the
    /// HTTP status code.
    pub async fn subscription_cancel(
        &self,
        subscription_id: &str,
    ) -> Result<http::StatusCode, Error> {
        let response = self
            .execute(
                Method::DELETE,
                &format!("/subscription/{subscription_id}"),
                None,
            )
            .await?;
        Ok(response.status)
    }
}
