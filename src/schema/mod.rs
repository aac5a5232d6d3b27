//! Request and response shapes for the PayGate v2 API.
//!
//! Everything here is plain serde data: shapes are validated at the decode
//! boundary (a response that does not match its shape fails
//! deserialization) and requests with cross-field rules expose an explicit
//! `validate` step that runs before any network I/O.
//!
//! Amounts are [`rust_decimal::Decimal`]; timestamps are RFC 3339
//! [`time::OffsetDateTime`] values and plain [`time::Date`]s.

mod common;
mod enums;
mod error;
mod invoice;
mod payment;
mod receipt;
mod subscription;
mod token;

pub(crate) mod datetime;


pub use common::{
    Account, Address, Deeplink, Discount, InvoiceReceiverData, Line, Offset, SenderBranchData,
    SenderStaffData, SenderTerminalData, SubscriptionInterval, Surcharge, Tax, Transaction,
};
pub use enums::{
    BankCode, Currency, InvoiceStatus, ObjectType, PaymentStatus, ReceiptReceiverType, TaxCode,
    TaxType, TransactionType,
};
pub use error::ValidationError;
pub use invoice::{
    InvoiceCreateRequest, InvoiceCreateResponse, InvoiceCreateSimpleRequest, InvoiceGetResponse,
};
pub use payment::{
    CardTransaction, P2pTransaction, Payment, PaymentCancelRequest, PaymentCheckRequest,
    PaymentCheckResponse, PaymentGetResponse, PaymentListRequest, PaymentListResponse,
    PaymentRefundRequest, PaymentRow,
};
pub use receipt::{Receipt, ReceiptCreateRequest};
pub use subscription::{Subscription, SubscriptionGetResponse, SubscriptionInvoice};
pub use token::TokenResponse;
