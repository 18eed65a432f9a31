//! Settlement currencies

use crate::calendar::WorkWeek;
use crate::token::TokenCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies an instruction may settle in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    /// UAE Dirham
    AED,
    /// Saudi Riyal
    SAR,
    /// Singapore Dollar, legacy desk code
    SGP,
    /// Singapore Dollar
    SGD,
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
    /// Chinese Yuan
    CNY,
    /// Hong Kong Dollar
    HKD,
    /// Indian Rupee
    INR,
}

impl Currency {
    /// Get the currency code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AED => "AED",
            Currency::SAR => "SAR",
            Currency::SGP => "SGP",
            Currency::SGD => "SGD",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::CNY => "CNY",
            Currency::HKD => "HKD",
            Currency::INR => "INR",
        }
    }

    /// Parse from a currency code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Business week this currency settles in when no override is configured.
    ///
    /// Gulf currencies settle Sunday to Thursday.
    pub fn default_work_week(&self) -> WorkWeek {
        match self {
            Currency::AED | Currency::SAR => WorkWeek::SundayToThursday,
            _ => WorkWeek::MondayToFriday,
        }
    }

    /// Get all supported currencies
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::AED,
            Currency::SAR,
            Currency::SGP,
            Currency::SGD,
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::CHF,
            Currency::AUD,
            Currency::CAD,
            Currency::CNY,
            Currency::HKD,
            Currency::INR,
        ]
    }
}

impl TokenCategory for Currency {
    const CATEGORY: &'static str = "currency";

    fn from_token(token: &str) -> Option<Self> {
        Self::from_code(token)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::coerce;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::AED.code(), "AED");
        assert_eq!(Currency::SGP.code(), "SGP");
        assert_eq!(Currency::USD.code(), "USD");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("SAR"), Some(Currency::SAR));
        assert_eq!(Currency::from_code("sar"), Some(Currency::SAR));
        assert_eq!(Currency::from_code("LOD"), None);
    }

    #[test]
    fn test_currency_coerce() {
        assert_eq!(coerce::<Currency>(" aed "), Some(Currency::AED));
        assert_eq!(coerce::<Currency>("Sgp"), Some(Currency::SGP));
        assert_eq!(coerce::<Currency>("LOD"), None);
    }

    #[test]
    fn test_default_work_week() {
        assert_eq!(Currency::AED.default_work_week(), WorkWeek::SundayToThursday);
        assert_eq!(Currency::SAR.default_work_week(), WorkWeek::SundayToThursday);
        assert_eq!(Currency::USD.default_work_week(), WorkWeek::MondayToFriday);
        assert_eq!(Currency::SGP.default_work_week(), WorkWeek::MondayToFriday);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(format!("{}", Currency::INR), "INR");
    }

    #[test]
    fn test_all_currencies_round_trip_codes() {
        for currency in Currency::all() {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
    }
}
