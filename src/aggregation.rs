//! Per-day USD totals

use crate::instruction::ValidatedInstruction;
use crate::types::{Amount, SettlementDate};
use num_traits::Zero;
use std::collections::BTreeMap;

/// Total USD amount per actual settlement date, ordered by date.
///
/// Instructions without a settlement date share the `None` entry, which
/// sorts before every dated entry.
pub type DailyTotals = BTreeMap<SettlementDate, Amount>;

/// Sum USD amounts per actual settlement date
pub fn daily_totals<'a, I>(instructions: I) -> DailyTotals
where
    I: IntoIterator<Item = &'a ValidatedInstruction>,
{
    let mut totals = DailyTotals::new();
    for instruction in instructions {
        let total = totals
            .entry(instruction.actual_settlement_date())
            .or_insert_with(Amount::zero);
        *total += instruction.usd_amount();
    }
    totals
}

/// Sum USD amounts over every date
pub fn total_usd<'a, I>(instructions: I) -> Amount
where
    I: IntoIterator<Item = &'a ValidatedInstruction>,
{
    instructions
        .into_iter()
        .fold(Amount::zero(), |total, instruction| total + instruction.usd_amount())
}
