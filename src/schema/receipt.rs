//! E-receipt request and response shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::enums::{ObjectType, ReceiptReceiverType, TransactionType};

/// `POST /receipt/create` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptCreateRequest {
    /// The settled payment to issue a receipt for.
    pub payment_id: String,
    pub receipt_receiver_type: ReceiptReceiverType,
    /// Registration number of the receiver; required for organizations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// A tax e-receipt, returned by both `POST /receipt/create` and
/// `GET /receipt/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub receipt_by: String,
    pub receipt_receiver_type: ReceiptReceiverType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_receiver: Option<String>,
    pub district_code: String,
    pub bill_type: String,
    pub merchant_branch_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_terminal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_staff_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_register: Option<String>,
    pub payment_id: String,
    pub paid_by: TransactionType,
    pub object_type: ObjectType,
    pub object_id: String,
    pub amount: Decimal,
    pub vat_amount: Decimal,
    pub city_tax_amount: Decimal,
    /// QR payload printed on the receipt.
    pub receipt_qr_data: String,
    /// Tax-lottery number attached to the receipt.
    pub receipt_lottery: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub receipt_status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub receipt_status_date: OffsetDateTime,
    pub tax_type: String,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_date: OffsetDateTime,
    pub status: bool,
}
