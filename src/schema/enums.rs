//! String enums with fixed wire values.

use serde::{Deserialize, Serialize};

/// Currency codes accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cny,
    Rub,
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Open,
    Closed,
}

/// The rail a payment travelled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    P2p,
    Card,
}

/// Payment status reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    New,
    Failed,
    Paid,
    Partial,
    Refund,
}

/// Who a tax receipt is issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReceiptReceiverType {
    Individual,
    Organization,
}

/// Bank identification codes published by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankCode {
    #[serde(rename = "010000")]
    CentralBank,
    #[serde(rename = "020000")]
    CapitalBank,
    #[serde(rename = "040000")]
    TradeDevelopmentBank,
    #[serde(rename = "050000")]
    NationalCommerceBank,
    #[serde(rename = "150000")]
    MerchantsBank,
    #[serde(rename = "290000")]
    UnionCreditBank,
    #[serde(rename = "320000")]
    FrontierBank,
    #[serde(rename = "340000")]
    StateBank,
    #[serde(rename = "500000")]
    DigitalFinance,
    #[serde(rename = "900000")]
    StateFund,
    #[serde(rename = "100000")]
    TestBank,
}

/// What kind of object a payment was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectType {
    Invoice,
    Qr,
    Item,
}

/// VAT treatment for an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxType {
    #[serde(rename = "1")]
    WithTax,
    #[serde(rename = "2")]
    WithoutTax,
    #[serde(rename = "3")]
    ExcludeTax,
}

/// Tax categories that can appear on invoice lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxCode {
    CityTax,
    Vat,
}
