//! CSV loading of raw instructions

use crate::calendar::parse_date_with;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::instruction::RawInstruction;
use crate::types::{Amount, Units};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Column names of an instruction CSV
#[derive(Debug, Clone)]
pub struct CsvColumns {
    pub entity: String,
    pub direction: String,
    pub currency: String,
    pub exchange_rate: String,
    pub instruction_date: String,
    pub settlement_date: String,
    pub units: String,
    pub price_per_unit: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            entity: "entity".to_string(),
            direction: "direction".to_string(),
            currency: "currency".to_string(),
            exchange_rate: "exchange_rate".to_string(),
            instruction_date: "instruction_date".to_string(),
            settlement_date: "settlement_date".to_string(),
            units: "units".to_string(),
            price_per_unit: "price_per_unit".to_string(),
        }
    }
}

struct ColumnIndex {
    entity: usize,
    direction: usize,
    currency: usize,
    exchange_rate: usize,
    instruction_date: usize,
    settlement_date: usize,
    units: usize,
    price_per_unit: usize,
}

/// Reads raw instructions from CSV.
///
/// Direction and currency are taken verbatim; they are judged when the
/// report is built. Dates that do not parse are left empty. Numbers that do
/// not parse fail the whole load.
pub struct InstructionCsvReader {
    columns: CsvColumns,
    date_format: String,
}

impl InstructionCsvReader {
    /// Create a reader with default columns and date format
    pub fn new() -> Self {
        Self::with_config(&ReportConfig::default())
    }

    /// Create a reader using the configured date format
    pub fn with_config(config: &ReportConfig) -> Self {
        Self {
            columns: CsvColumns::default(),
            date_format: config.date_format.clone(),
        }
    }

    /// Use custom column names
    pub fn with_columns(mut self, columns: CsvColumns) -> Self {
        self.columns = columns;
        self
    }

    /// Load instructions from a CSV file
    pub fn load_path(&self, path: &Path) -> Result<Vec<RawInstruction>> {
        log::info!("Loading instructions from {}", path.display());
        let rdr = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| ReportError::DataError(format!("Failed to open CSV: {}", e)))?;
        self.load(rdr)
    }

    /// Load instructions from any CSV source
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<RawInstruction>> {
        let rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        self.load(rdr)
    }

    fn load<R: Read>(&self, mut rdr: csv::Reader<R>) -> Result<Vec<RawInstruction>> {
        let headers = rdr.headers()?.clone();
        let index = self.index(&headers)?;

        let mut instructions = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            // Header is line 1
            let row = i + 2;
            instructions.push(self.parse_record(&record, &index, row)?);
        }

        log::debug!("Loaded {} instructions", instructions.len());
        Ok(instructions)
    }

    fn index(&self, headers: &StringRecord) -> Result<ColumnIndex> {
        let c = &self.columns;
        Ok(ColumnIndex {
            entity: find_column(headers, &c.entity)?,
            direction: find_column(headers, &c.direction)?,
            currency: find_column(headers, &c.currency)?,
            exchange_rate: find_column(headers, &c.exchange_rate)?,
            instruction_date: find_column(headers, &c.instruction_date)?,
            settlement_date: find_column(headers, &c.settlement_date)?,
            units: find_column(headers, &c.units)?,
            price_per_unit: find_column(headers, &c.price_per_unit)?,
        })
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        index: &ColumnIndex,
        row: usize,
    ) -> Result<RawInstruction> {
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let exchange_rate = parse_decimal(field(index.exchange_rate), "exchange_rate", row)?;
        let price_per_unit = parse_decimal(field(index.price_per_unit), "price_per_unit", row)?;
        let units = Units::from_str(field(index.units)).map_err(|_| ReportError::InvalidField {
            row,
            field: "units",
            value: field(index.units).to_string(),
        })?;

        let instruction_date = parse_date_with(field(index.instruction_date), &self.date_format);
        let settlement_date = parse_date_with(field(index.settlement_date), &self.date_format);
        if settlement_date.is_none() {
            log::warn!(
                "Row {}: unparseable settlement date {:?}",
                row,
                field(index.settlement_date)
            );
        }

        Ok(RawInstruction::new(
            field(index.entity),
            field(index.direction),
            field(index.currency),
        )
        .with_exchange_rate(exchange_rate)
        .with_units(units)
        .with_price_per_unit(price_per_unit)
        .with_dates(instruction_date, settlement_date))
    }
}

impl Default for InstructionCsvReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_decimal(text: &str, field: &'static str, row: usize) -> Result<Amount> {
    Amount::from_str(text).map_err(|_| ReportError::InvalidField {
        row,
        field,
        value: text.to_string(),
    })
}

/// Find column index by name
fn find_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| ReportError::DataError(format!("Column '{}' not found", name)))
}
