//! Settlement instructions
//!
//! An instruction is received as a [`RawInstruction`] and, only if it passes
//! validation, turned into a [`ValidatedInstruction`] carrying the derived
//! fields. Anything else becomes a [`RejectedInstruction`].

use crate::calendar::{format_date, parse_date_with, DEFAULT_DATE_FORMAT};
use crate::config::ReportConfig;
use crate::currency::Currency;
use crate::side::{FlowDirection, Side};
use crate::token::{coerce, TokenCategory};
use crate::types::{units_text, Amount, EntityId, SettlementDate, Units};
use chrono::NaiveDate;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A settlement instruction exactly as received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstruction {
    /// Instructing entity
    pub entity: EntityId,
    /// Direction text, e.g. `B` or `S`
    pub direction: String,
    /// Currency text, e.g. `SAR`
    pub currency: String,
    /// Agreed FX rate to USD
    pub exchange_rate: Amount,
    /// Date the instruction was sent
    pub instruction_date: Option<NaiveDate>,
    /// Requested settlement date
    pub settlement_date: Option<NaiveDate>,
    /// Number of units traded
    #[serde(with = "units_text")]
    pub units: Units,
    /// Price of one unit in the instruction currency
    pub price_per_unit: Amount,
}

impl RawInstruction {
    /// Create an instruction with unit rate, no units and no dates
    pub fn new(
        entity: impl Into<String>,
        direction: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            direction: direction.into(),
            currency: currency.into(),
            exchange_rate: Amount::one(),
            instruction_date: None,
            settlement_date: None,
            units: Units::zero(),
            price_per_unit: Amount::zero(),
        }
    }

    pub fn with_exchange_rate(mut self, rate: Amount) -> Self {
        self.exchange_rate = rate;
        self
    }

    pub fn with_units(mut self, units: impl Into<Units>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_price_per_unit(mut self, price: Amount) -> Self {
        self.price_per_unit = price;
        self
    }

    pub fn with_dates(
        mut self,
        instruction_date: Option<NaiveDate>,
        settlement_date: Option<NaiveDate>,
    ) -> Self {
        self.instruction_date = instruction_date;
        self.settlement_date = settlement_date;
        self
    }

    /// Set both dates from `DD Mon YYYY` text; unparseable text leaves the date empty
    pub fn with_date_text(self, instruction_date: &str, settlement_date: &str) -> Self {
        self.with_dates(
            parse_date_with(instruction_date, DEFAULT_DATE_FORMAT),
            parse_date_with(settlement_date, DEFAULT_DATE_FORMAT),
        )
    }

    /// Check whether direction and currency are recognised
    pub fn validate(&self) -> bool {
        self.classify().is_ok()
    }

    /// Coerce direction and currency, reporting the first unrecognised one
    pub fn classify(&self) -> std::result::Result<(Side, Currency), Rejection> {
        let side = coerce::<Side>(&self.direction)
            .ok_or_else(|| Rejection::UnknownDirection(self.direction.clone()))?;
        let currency = coerce::<Currency>(&self.currency)
            .ok_or_else(|| Rejection::UnknownCurrency(self.currency.clone()))?;
        Ok((side, currency))
    }

    /// `price_per_unit * units * exchange_rate`, exact at any magnitude
    pub fn usd_amount(&self) -> Amount {
        let units = Amount::new(BigInt::from(self.units.clone()), 0);
        &self.price_per_unit * &units * &self.exchange_rate
    }
}

/// Why an instruction was left out of the report
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("unrecognised direction {0:?}")]
    UnknownDirection(String),

    #[error("unrecognised currency {0:?}")]
    UnknownCurrency(String),
}

impl Rejection {
    /// Field category the rejection refers to
    pub fn category(&self) -> &'static str {
        match self {
            Rejection::UnknownDirection(_) => Side::CATEGORY,
            Rejection::UnknownCurrency(_) => Currency::CATEGORY,
        }
    }
}

/// An instruction that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedInstruction {
    pub instruction: RawInstruction,
    pub reason: Rejection,
}

/// An instruction that passed validation, with its derived fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInstruction {
    raw: RawInstruction,
    side: Side,
    currency: Currency,
    usd_amount: Amount,
    actual_settlement_date: SettlementDate,
}

impl ValidatedInstruction {
    /// Validate a raw instruction and compute its derived fields
    pub fn from_raw(
        raw: RawInstruction,
        config: &ReportConfig,
    ) -> std::result::Result<Self, RejectedInstruction> {
        let (side, currency) = match raw.classify() {
            Ok(coerced) => coerced,
            Err(reason) => return Err(RejectedInstruction { instruction: raw, reason }),
        };

        let usd_amount = raw.usd_amount();

        let work_week = config.work_week(currency);
        let actual_settlement_date = raw
            .settlement_date
            .map(|date| work_week.adjust_settlement_date(date));

        Ok(Self {
            raw,
            side,
            currency,
            usd_amount,
            actual_settlement_date,
        })
    }

    /// The instruction as received
    pub fn raw(&self) -> &RawInstruction {
        &self.raw
    }

    pub fn entity(&self) -> &str {
        &self.raw.entity
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn flow(&self) -> FlowDirection {
        self.side.flow()
    }

    pub fn usd_amount(&self) -> &Amount {
        &self.usd_amount
    }

    /// Settlement date after moving it off the weekend
    pub fn actual_settlement_date(&self) -> SettlementDate {
        self.actual_settlement_date
    }
}

impl fmt::Display for ValidatedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .actual_settlement_date
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Instruction({}, {}, {}, {} units @ {} x {}, USD {}, settles {})",
            self.raw.entity,
            self.side,
            self.currency,
            self.raw.units,
            self.raw.price_per_unit,
            self.raw.exchange_rate,
            self.usd_amount,
            date
        )
    }
}
