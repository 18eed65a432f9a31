//! Core types shared across the report

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use num_bigint::BigUint;

/// Money amount, exact base-10 with unbounded precision
pub type Amount = BigDecimal;

/// Number of units traded
pub type Units = BigUint;

/// Identifier of the instructing entity
pub type EntityId = String;

/// Settlement date; `None` when the input date could not be parsed
pub type SettlementDate = Option<NaiveDate>;

/// Serde helper writing [`Units`] as a decimal string
pub(crate) mod units_text {
    use super::Units;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(units: &Units, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(units)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Units, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.trim().parse().map_err(de::Error::custom)
    }
}
