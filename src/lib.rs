//! # Settlement Report
//!
//! Builds a daily report over a batch of FX settlement instructions.
//!
//! Each instruction is validated (known direction and currency), given a
//! USD amount and moved off the weekend of its currency's business week.
//! Valid instructions are split into incoming (sells) and outgoing (buys),
//! entities are ranked by their largest trade, and USD amounts are totalled
//! per settlement day.
//!
//! ## Example
//!
//! ```rust
//! use settlement_report::prelude::*;
//!
//! let instructions = vec![
//!     RawInstruction::new("foo", "B", "SAR")
//!         .with_exchange_rate("9.50".parse::<Amount>().unwrap())
//!         .with_units(200u32)
//!         .with_price_per_unit("100.25".parse::<Amount>().unwrap())
//!         .with_date_text("01 Jan 2016", "08 Sep 2018"),
//!     RawInstruction::new("zero", "S", "LOD"),
//! ];
//!
//! let report = Report::build(&instructions);
//! assert_eq!(report.valid_instructions().len(), 1);
//! assert_eq!(report.outgoing_rankings()[0].entity, "foo");
//! assert_eq!(report.outgoing_rankings()[0].highest_usd_amount.to_string(), "190475.0000");
//! ```

pub mod aggregation;
pub mod calendar;
pub mod config;
pub mod currency;
pub mod error;
pub mod instruction;
pub mod loader;
pub mod ranking;
pub mod report;
pub mod sample;
pub mod side;
pub mod token;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::aggregation::DailyTotals;
    pub use crate::calendar::{BusinessCalendar, WorkWeek};
    pub use crate::config::ReportConfig;
    pub use crate::currency::Currency;
    pub use crate::error::{ReportError, Result};
    pub use crate::instruction::{RawInstruction, RejectedInstruction, Rejection, ValidatedInstruction};
    pub use crate::loader::InstructionCsvReader;
    pub use crate::ranking::EntityRanking;
    pub use crate::report::{Report, ReportSummary};
    pub use crate::side::{FlowDirection, Side};
    pub use crate::types::*;
}
