//! Payment request and response shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::common::Offset;
use super::datetime;
use super::enums::{BankCode, Currency, ObjectType, PaymentStatus, TransactionType};

/// A card leg of a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTransaction {
    pub card_type: String,
    pub is_cross_border: bool,
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub status: String,
    pub settlement_status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub settlement_status_date: OffsetDateTime,
}

/// A bank-transfer leg of a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P2pTransaction {
    pub transaction_bank_code: BankCode,
    pub account_bank_code: BankCode,
    pub account_bank_name: String,
    pub account_number: String,
    pub status: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub settlement_status: String,
}

/// One settled payment row as returned by `POST /payment/check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub payment_status: PaymentStatus,
    pub payment_amount: Decimal,
    pub trx_fee: Decimal,
    pub payment_currency: Currency,
    /// Wallet that funded the payment.
    pub payment_wallet: String,
    pub payment_type: TransactionType,
    #[serde(
        default,
        with = "datetime::date_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_date: Option<Date>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_datetime: Option<OffsetDateTime>,
    pub card_transactions: Vec<CardTransaction>,
    pub p2p_transactions: Vec<P2pTransaction>,
}

/// One payment row as returned by `POST /payment/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    pub payment_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub payment_date: OffsetDateTime,
    pub payment_status: PaymentStatus,
    pub payment_fee: Decimal,
    pub payment_amount: Decimal,
    pub payment_currency: Currency,
    pub payment_wallet: String,
    pub payment_name: String,
    pub payment_description: String,
    #[serde(
        default,
        with = "datetime::date_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_date: Option<Date>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_datetime: Option<OffsetDateTime>,
    pub paid_by: TransactionType,
    pub object_type: ObjectType,
    pub object_id: String,
}

/// `GET /payment/{id}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentGetResponse {
    pub payment_id: String,
    pub payment_status: PaymentStatus,
    pub payment_amount: Decimal,
    pub payment_fee: Decimal,
    pub payment_currency: Currency,
    #[serde(with = "time::serde::rfc3339")]
    pub payment_date: OffsetDateTime,
    pub payment_wallet: String,
    pub transaction_type: TransactionType,
    pub object_type: ObjectType,
    pub object_id: String,
    #[serde(
        default,
        with = "datetime::date_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_date: Option<Date>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_datetime: Option<OffsetDateTime>,
    pub card_transactions: Vec<CardTransaction>,
    pub p2p_transactions: Vec<P2pTransaction>,
}

/// `POST /payment/check` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCheckRequest {
    /// What the payment was made against, normally an invoice.
    pub object_type: ObjectType,
    pub object_id: String,
    pub offset: Offset,
}

impl PaymentCheckRequest {
    /// Builds a check request for an invoice with the default pagination.
    #[must_use]
    pub fn for_invoice(invoice_id: impl Into<String>) -> Self {
        Self {
            object_type: ObjectType::Invoice,
            object_id: invoice_id.into(),
            offset: Offset::default(),
        }
    }
}

/// `POST /payment/check` response.
///
/// `count` is the number of settled payments the gateway has recorded so
/// far. Zero is a normal outcome immediately after a payment: settlement on
/// the gateway side is asynchronous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCheckResponse {
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Decimal>,
    pub rows: Vec<Payment>,
}

impl PaymentCheckResponse {
    /// Returns true once at least one payment has settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.count > 0
    }
}

/// `POST /payment/list` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListRequest {
    pub object_type: ObjectType,
    pub object_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    pub offset: Offset,
}

/// `POST /payment/list` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListResponse {
    pub count: u32,
    pub rows: Vec<PaymentRow>,
}

/// `DELETE /payment/cancel/{id}` request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCancelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// `DELETE /payment/refund/{id}` request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRefundRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
