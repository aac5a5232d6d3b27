//! Subscription response shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::common::{Line, SubscriptionInterval};
use super::enums::{Currency, InvoiceStatus, ObjectType};
use super::payment::PaymentRow;

/// A recurring-billing subscription opened by an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub is_active: bool,
    pub merchant_id: String,
    /// The invoice that opened the subscription.
    pub invoice_id: String,
    /// Webhook notified on every billing cycle.
    pub webhook: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    pub interval: SubscriptionInterval,
    #[serde(with = "time::serde::rfc3339")]
    pub last_interval_date: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_date: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_date: OffsetDateTime,
    pub status: bool,
}

/// An invoice generated by a subscription's billing cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionInvoice {
    pub id: String,
    pub merchant_id: String,
    pub object_type: ObjectType,
    pub object_id: String,
    pub qr_code: String,
    pub sender_invoice_no: String,
    pub sender_name: String,
    pub invoice_no: String,
    pub invoice_description: String,
    pub invoice_currency: Currency,
    pub invoice_status: InvoiceStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub invoice_status_date: OffsetDateTime,
    pub invoice_amount: Decimal,
    pub gross_amount: Decimal,
    pub tax_amount: Decimal,
    pub surcharge_amount: Decimal,
    pub discount_amount: Decimal,
    pub allow_partial: bool,
    pub callback_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_date: OffsetDateTime,
    pub status: bool,
    #[serde(default)]
    pub invoice_lines: Vec<Line>,
}

/// `GET /subscription/{id}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionGetResponse {
    #[serde(flatten)]
    pub subscription: Subscription,
    /// Invoices issued by past billing cycles.
    #[serde(default)]
    pub invoices: Vec<SubscriptionInvoice>,
    /// Payments collected by past billing cycles.
    #[serde(default)]
    pub payments: Vec<PaymentRow>,
}
