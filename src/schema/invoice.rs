//! Invoice request and response shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::common::{
    Deeplink, InvoiceReceiverData, Line, SenderBranchData, SenderStaffData, SenderTerminalData,
    SubscriptionInterval, Transaction,
};
use super::enums::{InvoiceStatus, TaxType};
use super::error::ValidationError;
use super::payment::Payment;
use super::subscription::Subscription;

/// `POST /invoice` request with a flat amount and no line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCreateSimpleRequest {
    /// Invoice template code issued to the merchant.
    pub invoice_code: String,
    /// Merchant-side invoice number.
    pub sender_invoice_no: String,
    /// Merchant-side identifier of the payer.
    pub invoice_receiver_code: String,
    pub invoice_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_code: Option<String>,
    pub amount: Decimal,
    /// URL the gateway calls when the invoice is paid.
    pub callback_url: String,
}

/// `POST /invoice` request with the full feature surface.
///
/// Cross-field rules are checked by [`validate`](Self::validate) before the
/// request is sent:
/// - at least one of `amount` and `lines` must be set;
/// - `allow_subscribe` requires `subscription_interval`,
///   `subscription_webhook` and at least one line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCreateRequest {
    pub invoice_code: String,
    pub sender_invoice_no: String,
    pub invoice_receiver_code: String,
    pub invoice_description: String,
    pub callback_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_data: Option<SenderBranchData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_data: Option<SenderStaffData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_terminal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_terminal_data: Option<SenderTerminalData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_receiver_data: Option<InvoiceReceiverData>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_due_date: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_expiry: Option<bool>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculate_vat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<TaxType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_customer_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_tax_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_partial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_exceed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_subscribe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_interval: Option<SubscriptionInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_webhook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<Line>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
}

impl InvoiceCreateRequest {
    /// Checks the cross-field rules the gateway enforces server-side.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_lines = self.lines.as_ref().is_some_and(|lines| !lines.is_empty());

        if self.amount.is_none() && !has_lines {
            return Err(ValidationError::MissingAmountOrLines);
        }

        if self.allow_subscribe == Some(true) {
            if self.subscription_interval.is_none() || self.subscription_webhook.is_none() {
                return Err(ValidationError::SubscriptionFieldsRequired);
            }
            if !has_lines {
                return Err(ValidationError::SubscriptionLinesRequired);
            }
        }

        Ok(())
    }
}

/// `POST /invoice` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCreateResponse {
    /// Present when the invoice opened a subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    pub invoice_id: String,
    /// QR payload to render merchant-side.
    pub qr_text: String,
    /// Base64 QR image.
    pub qr_image: String,
    pub short_url: String,
    /// Wallet-app deeplinks for this invoice.
    pub urls: Vec<Deeplink>,
}

/// `GET /invoice/{id}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceGetResponse {
    pub invoice_id: String,
    pub invoice_status: InvoiceStatus,
    pub sender_invoice_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_data: Option<SenderBranchData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_data: Option<SenderStaffData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_terminal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_terminal_data: Option<SenderTerminalData>,
    pub invoice_description: String,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_due_date: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_expiry: Option<bool>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_partial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_exceed: Option<bool>,
    pub total_amount: Decimal,
    pub gross_amount: Decimal,
    pub tax_amount: Decimal,
    pub surcharge_amount: Decimal,
    pub callback_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<Line>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    /// Payments already posted against this invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,
}
