//! Settlement report
//!
//! A report is built in two phases. Every instruction is first validated
//! and given its derived fields on its own; the valid ones are then split
//! by cash-flow direction, ranked and aggregated.

use crate::aggregation::{daily_totals, total_usd, DailyTotals};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::instruction::{RawInstruction, RejectedInstruction, ValidatedInstruction};
use crate::ranking::{rank_entities, EntityRanking};
use crate::side::FlowDirection;
use crate::types::{Amount, SettlementDate};
use serde::{Deserialize, Serialize};

/// Instructions split by validity, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPartition {
    pub valid: Vec<ValidatedInstruction>,
    pub invalid: Vec<RejectedInstruction>,
}

/// Valid instructions split by cash-flow direction, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionPartition {
    /// Sell instructions
    pub incoming: Vec<ValidatedInstruction>,
    /// Buy instructions
    pub outgoing: Vec<ValidatedInstruction>,
}

impl DirectionPartition {
    fn split(valid: &[ValidatedInstruction]) -> Self {
        let (incoming, outgoing): (Vec<_>, Vec<_>) = valid
            .iter()
            .cloned()
            .partition(|instruction| instruction.flow() == FlowDirection::Incoming);
        Self { incoming, outgoing }
    }

    /// Instructions flowing in the given direction
    pub fn get(&self, flow: FlowDirection) -> &[ValidatedInstruction] {
        match flow {
            FlowDirection::Incoming => &self.incoming,
            FlowDirection::Outgoing => &self.outgoing,
        }
    }
}

/// Counts and totals of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub valid_count: usize,
    pub invalid_count: usize,
    pub incoming_count: usize,
    pub outgoing_count: usize,
    pub incoming_total_usd: Amount,
    pub outgoing_total_usd: Amount,
}

/// One row of a per-day totals listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: SettlementDate,
    pub total_usd: Amount,
}

/// Daily settlement report over a batch of instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    validity: ValidityPartition,
    directions: DirectionPartition,
    incoming_rankings: Vec<EntityRanking>,
    outgoing_rankings: Vec<EntityRanking>,
}

impl Report {
    /// Build a report with the default configuration
    pub fn build(instructions: &[RawInstruction]) -> Self {
        Self::with_config(instructions, &ReportConfig::default())
    }

    /// Build a report
    pub fn with_config(instructions: &[RawInstruction], config: &ReportConfig) -> Self {
        log::info!("Building report from {} instructions", instructions.len());

        let mut validity = ValidityPartition::default();
        for raw in instructions {
            match ValidatedInstruction::from_raw(raw.clone(), config) {
                Ok(instruction) => {
                    if instruction.actual_settlement_date().is_none() {
                        log::warn!(
                            "Instruction for {} has no settlement date, grouping it undated",
                            instruction.entity()
                        );
                    }
                    validity.valid.push(instruction);
                }
                Err(rejected) => {
                    log::debug!(
                        "Rejected instruction for {}: {}",
                        rejected.instruction.entity,
                        rejected.reason
                    );
                    validity.invalid.push(rejected);
                }
            }
        }

        let directions = DirectionPartition::split(&validity.valid);
        let incoming_rankings = rank_entities(&directions.incoming);
        let outgoing_rankings = rank_entities(&directions.outgoing);

        log::info!(
            "Report built: {} valid ({} incoming, {} outgoing), {} invalid",
            validity.valid.len(),
            directions.incoming.len(),
            directions.outgoing.len(),
            validity.invalid.len()
        );

        Self {
            validity,
            directions,
            incoming_rankings,
            outgoing_rankings,
        }
    }

    pub fn valid_instructions(&self) -> &[ValidatedInstruction] {
        &self.validity.valid
    }

    pub fn invalid_instructions(&self) -> &[RejectedInstruction] {
        &self.validity.invalid
    }

    pub fn validity(&self) -> &ValidityPartition {
        &self.validity
    }

    pub fn directions(&self) -> &DirectionPartition {
        &self.directions
    }

    /// Valid sell instructions
    pub fn incoming_instructions(&self) -> &[ValidatedInstruction] {
        &self.directions.incoming
    }

    /// Valid buy instructions
    pub fn outgoing_instructions(&self) -> &[ValidatedInstruction] {
        &self.directions.outgoing
    }

    pub fn incoming_rankings(&self) -> &[EntityRanking] {
        &self.incoming_rankings
    }

    pub fn outgoing_rankings(&self) -> &[EntityRanking] {
        &self.outgoing_rankings
    }

    /// Entity ranking for the given direction
    pub fn rankings(&self, flow: FlowDirection) -> &[EntityRanking] {
        match flow {
            FlowDirection::Incoming => &self.incoming_rankings,
            FlowDirection::Outgoing => &self.outgoing_rankings,
        }
    }

    /// USD settled per actual settlement date in the given direction
    pub fn daily_totals(&self, flow: FlowDirection) -> DailyTotals {
        daily_totals(self.directions.get(flow))
    }

    pub fn incoming_daily_totals(&self) -> DailyTotals {
        self.daily_totals(FlowDirection::Incoming)
    }

    pub fn outgoing_daily_totals(&self) -> DailyTotals {
        self.daily_totals(FlowDirection::Outgoing)
    }

    /// USD settled over all dates in the given direction
    pub fn total_usd(&self, flow: FlowDirection) -> Amount {
        total_usd(self.directions.get(flow))
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            valid_count: self.validity.valid.len(),
            invalid_count: self.validity.invalid.len(),
            incoming_count: self.directions.incoming.len(),
            outgoing_count: self.directions.outgoing.len(),
            incoming_total_usd: self.total_usd(FlowDirection::Incoming),
            outgoing_total_usd: self.total_usd(FlowDirection::Outgoing),
        }
    }

    /// Render the whole report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let document = ReportDocument {
            summary: self.summary(),
            incoming: &self.directions.incoming,
            outgoing: &self.directions.outgoing,
            invalid: &self.validity.invalid,
            incoming_rankings: &self.incoming_rankings,
            outgoing_rankings: &self.outgoing_rankings,
            incoming_daily_totals: daily_rows(self.incoming_daily_totals()),
            outgoing_daily_totals: daily_rows(self.outgoing_daily_totals()),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

// JSON object keys must be strings, so per-day totals are written as rows.
fn daily_rows(totals: DailyTotals) -> Vec<DailyTotal> {
    totals
        .into_iter()
        .map(|(date, total_usd)| DailyTotal { date, total_usd })
        .collect()
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    summary: ReportSummary,
    incoming: &'a [ValidatedInstruction],
    outgoing: &'a [ValidatedInstruction],
    invalid: &'a [RejectedInstruction],
    incoming_rankings: &'a [EntityRanking],
    outgoing_rankings: &'a [EntityRanking],
    incoming_daily_totals: Vec<DailyTotal>,
    outgoing_daily_totals: Vec<DailyTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Rejection;
    use num_traits::Zero;
    use std::str::FromStr;

    fn dec(text: &str) -> Amount {
        Amount::from_str(text).unwrap()
    }

    fn instruction(entity: &str, direction: &str, currency: &str, price: &str) -> RawInstruction {
        RawInstruction::new(entity, direction, currency)
            .with_units(10u32)
            .with_price_per_unit(dec(price))
            .with_date_text("01 Jan 2018", "12 Sep 2018")
    }

    #[test]
    fn test_partitions() {
        let report = Report::build(&[
            instruction("a", "S", "USD", "1"),
            instruction("b", "B", "EUR", "2"),
            instruction("c", "X", "USD", "3"),
            instruction("d", "sell", "gbp", "4"),
        ]);

        assert_eq!(report.valid_instructions().len(), 3);
        assert_eq!(report.invalid_instructions().len(), 1);
        assert_eq!(
            report.invalid_instructions()[0].reason,
            Rejection::UnknownDirection("X".to_string())
        );

        let incoming: Vec<&str> = report.incoming_instructions().iter().map(|i| i.entity()).collect();
        let outgoing: Vec<&str> = report.outgoing_instructions().iter().map(|i| i.entity()).collect();
        assert_eq!(incoming, vec!["a", "d"]);
        assert_eq!(outgoing, vec!["b"]);
    }

    #[test]
    fn test_missing_direction_is_empty() {
        let report = Report::build(&[instruction("a", "B", "USD", "1")]);

        assert!(report.incoming_instructions().is_empty());
        assert!(report.incoming_rankings().is_empty());
        assert!(report.incoming_daily_totals().is_empty());
        assert_eq!(report.total_usd(FlowDirection::Incoming), Amount::zero());
    }

    #[test]
    fn test_empty_batch() {
        let report = Report::build(&[]);
        let summary = report.summary();

        assert_eq!(summary.valid_count, 0);
        assert_eq!(summary.invalid_count, 0);
        assert_eq!(summary.incoming_total_usd, Amount::zero());
    }

    #[test]
    fn test_summary_totals() {
        let report = Report::build(&[
            instruction("a", "S", "USD", "1.5"),
            instruction("b", "S", "USD", "2"),
            instruction("c", "B", "USD", "7"),
        ]);
        let summary = report.summary();

        assert_eq!(summary.incoming_count, 2);
        assert_eq!(summary.outgoing_count, 1);
        assert_eq!(summary.incoming_total_usd, dec("35"));
        assert_eq!(summary.outgoing_total_usd, dec("70"));
    }

    #[test]
    fn test_huge_product_is_valid() {
        let raw = RawInstruction::new("big", "S", "USD")
            .with_exchange_rate(dec("10"))
            .with_units(1_000_000_000_000u64)
            .with_price_per_unit(dec("1e17"));

        let report = Report::build(&[raw]);

        assert_eq!(report.valid_instructions().len(), 1);
        assert!(report.invalid_instructions().is_empty());
        assert_eq!(report.total_usd(FlowDirection::Incoming), dec("1000000000000000000000000000000"));
        assert_eq!(report.incoming_rankings()[0].highest_usd_amount, dec("1e30"));
    }

    #[test]
    fn test_to_json() {
        let report = Report::build(&[
            instruction("a", "S", "USD", "1.5"),
            instruction("z", "S", "LOD", "1"),
        ]);

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["valid_count"], 1);
        assert_eq!(value["summary"]["invalid_count"], 1);
        assert_eq!(value["incoming_rankings"][0]["entity"], "a");
        assert_eq!(value["incoming_daily_totals"][0]["date"], "2018-09-12");
        assert_eq!(value["incoming_daily_totals"][0]["total_usd"], "15.0");
        assert_eq!(value["incoming"][0]["raw"]["units"], "10");
    }
}
