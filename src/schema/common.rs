//! Shapes shared between invoice, payment and subscription payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{BankCode, Currency, TaxCode};
use super::error::ValidationError;

/// A wallet-app deeplink offered for paying an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deeplink {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub link: String,
}

/// Postal address attached to an invoice receiver or branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
}

/// Details of the party an invoice is billed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceReceiverData {
    /// Company or citizen registration number. Wire name is `register`.
    #[serde(
        rename = "register",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Details of the merchant branch an invoice was issued from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderBranchData {
    /// Branch registration number. Wire name is `register`.
    #[serde(
        rename = "register",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Details of the staff member who issued an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderStaffData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Details of the terminal an invoice was issued from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderTerminalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A discount applied to an invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    pub description: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A surcharge applied to an invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surcharge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surcharge_code: Option<String>,
    pub description: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A tax applied to an invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<TaxCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A settlement account attached to an invoice transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_bank_code: BankCode,
    pub account_number: String,
    pub account_name: String,
    pub account_currency: Currency,
    pub is_default: bool,
}

/// One line item on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_product_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_product_code: Option<String>,
    pub line_description: String,
    pub line_quantity: Decimal,
    pub line_unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<Discount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surcharges: Option<Vec<Surcharge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Vec<Tax>>,
}

/// A settlement transaction attached to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,
}

/// Pagination window for list/check requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    /// 1-based page number.
    pub page_number: u32,
    /// Rows per page, at most 1000.
    pub page_limit: u32,
}

impl Offset {
    /// Largest accepted page size.
    pub const MAX_PAGE_LIMIT: u32 = 1000;

    /// Creates a pagination window.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOffset`] when `page_number` is zero
    /// or `page_limit` is outside `1..=1000`.
    pub const fn new(page_number: u32, page_limit: u32) -> Result<Self, ValidationError> {
        if page_number < 1 {
            return Err(ValidationError::InvalidOffset {
                field: "page_number",
                expected: "at least 1",
                value: page_number,
            });
        }
        if page_limit < 1 || page_limit > Self::MAX_PAGE_LIMIT {
            return Err(ValidationError::InvalidOffset {
                field: "page_limit",
                expected: "between 1 and 1000",
                value: page_limit,
            });
        }
        Ok(Self {
            page_number,
            page_limit,
        })
    }
}

impl Default for Offset {
    /// First page, 100 rows.
    fn default() -> Self {
        Self {
            page_number: 1,
            page_limit: 100,
        }
    }
}

/// Billing interval for subscription invoices: a count and a unit, e.g.
/// `"30D"`, `"2W"` or `"1M"`.
///
/// The count is 1–9999 with no leading zero; the unit is `D`, `W` or `M`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionInterval(String);

impl SubscriptionInterval {
    /// Parses and validates an interval string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidInterval`] when the string does not
    /// match the `<1-9999><D|W|M>` grammar.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidInterval(raw.to_string());

        if raw.len() < 2 || raw.len() > 5 {
            return Err(invalid());
        }
        let (digits, unit) = raw.split_at(raw.len() - 1);
        if !matches!(unit, "D" | "W" | "M") {
            return Err(invalid());
        }
        let mut chars = digits.chars();
        match chars.next() {
            Some('1'..='9') => {}
            _ => return Err(invalid()),
        }
        if !chars.all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the interval as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for SubscriptionInterval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SubscriptionInterval {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SubscriptionInterval> for String {
    fn from(value: SubscriptionInterval) -> Self {
        value.0
    }
}

impl std::fmt::Display for SubscriptionInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
