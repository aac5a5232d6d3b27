//! Serde helpers for plain dates on the wire.
//!
//! Timestamps use RFC 3339 via [`time::serde::rfc3339`]; dates without a
//! time component are rendered as `YYYY-MM-DD`, which `time` has no
//! well-known serde module for.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Serde adapter for `Option<Date>` as `YYYY-MM-DD` or `null`.
pub(crate) mod date_option {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(
        value: &Option<Date>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => {
                let rendered = date
                    .format(&DATE_FORMAT)
                    .map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&rendered)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| Date::parse(&s, &DATE_FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}
