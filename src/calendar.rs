//! Settlement calendar implementation
//!
//! Only weekly weekends are modelled; there is no holiday calendar.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Text layout of instruction dates, e.g. `01 Jan 2016`
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

/// Business calendar trait
pub trait BusinessCalendar {
    /// Check if a date is a business day
    fn is_business_day(&self, date: NaiveDate) -> bool;
}

/// Business week convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkWeek {
    /// Weekend is Saturday and Sunday
    MondayToFriday,
    /// Weekend is Friday and Saturday
    SundayToThursday,
}

impl WorkWeek {
    /// Check if the weekday falls on this week's weekend
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WorkWeek::MondayToFriday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WorkWeek::SundayToThursday => matches!(weekday, Weekday::Fri | Weekday::Sat),
        }
    }

    /// Days to move a settlement falling on `weekday` to the first business day
    pub fn settlement_shift(&self, weekday: Weekday) -> i64 {
        match (self, weekday) {
            (WorkWeek::MondayToFriday, Weekday::Sat) => 2,
            (WorkWeek::MondayToFriday, Weekday::Sun) => 1,
            (WorkWeek::SundayToThursday, Weekday::Fri) => 2,
            (WorkWeek::SundayToThursday, Weekday::Sat) => 1,
            _ => 0,
        }
    }

    /// Shift a settlement date off the weekend.
    ///
    /// The shift is derived from the original weekday only, so the result
    /// is already a business day and is never re-evaluated.
    pub fn adjust_settlement_date(&self, date: NaiveDate) -> NaiveDate {
        date + Duration::days(self.settlement_shift(date.weekday()))
    }
}

impl BusinessCalendar for WorkWeek {
    fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date.weekday())
    }
}

/// Parse an instruction date with the default `DD Mon YYYY` layout.
///
/// Unparseable text yields `None`; callers treat that as a missing date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_date_with(text, DEFAULT_DATE_FORMAT)
}

/// Parse an instruction date with an explicit chrono format string
pub fn parse_date_with(text: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), format).ok()
}

/// Render a date in the default `DD Mon YYYY` layout
pub fn format_date(date: NaiveDate) -> String {
    date.format(DEFAULT_DATE_FORMAT).to_string()
}
