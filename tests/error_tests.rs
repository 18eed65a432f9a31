//! Boundary error tests: files, configuration and CSV input

use settlement_report::{
    config::ReportConfig,
    currency::Currency,
    error::ReportError,
    loader::{CsvColumns, InstructionCsvReader},
    report::Report,
    types::Units,
};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CSV: &str = "\
entity,direction,currency,exchange_rate,instruction_date,settlement_date,units,price_per_unit
foo,B,SAR,9.50,01 Jan 2016,08 Sep 2018,200,70200000000.25
bar,S,SGP,0.50,01 Jan 2016,13 Sep 2018,2000,0.25
zero,S,LOD,0.50,01 Jan 2016,08 Sep 2018,2000,0.25
";

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_csv_file_and_build() {
    let file = temp_file(SAMPLE_CSV);

    let instructions = InstructionCsvReader::new().load_path(file.path()).unwrap();
    let report = Report::build(&instructions);

    assert_eq!(report.valid_instructions().len(), 2);
    assert_eq!(report.invalid_instructions().len(), 1);
    assert_eq!(report.incoming_instructions().len(), 1);
    assert_eq!(report.outgoing_instructions().len(), 1);
}

#[test]
fn test_missing_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = InstructionCsvReader::new()
        .load_path(&dir.path().join("missing.csv"))
        .unwrap_err();

    assert!(matches!(err, ReportError::DataError(_)));
    assert!(err.to_string().contains("Failed to open CSV"));
}

#[test]
fn test_custom_columns() {
    let csv = "\
who,side,ccy,fx,sent,settles,qty,px
foo,S,USD,1,01 Jan 2016,10 Sep 2018,3,2.5
";
    let columns = CsvColumns {
        entity: "who".into(),
        direction: "side".into(),
        currency: "ccy".into(),
        exchange_rate: "fx".into(),
        instruction_date: "sent".into(),
        settlement_date: "settles".into(),
        units: "qty".into(),
        price_per_unit: "px".into(),
    };

    let instructions = InstructionCsvReader::new()
        .with_columns(columns)
        .load_reader(csv.as_bytes())
        .unwrap();

    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].units, Units::from(3u32));
}

#[test]
fn test_ragged_csv_row() {
    let csv = "\
entity,direction,currency,exchange_rate,instruction_date,settlement_date,units,price_per_unit
foo,B,SAR
";
    let err = InstructionCsvReader::new().load_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ReportError::CsvError(_)));
}

#[test]
fn test_config_from_file() {
    let file = temp_file("sunday_to_thursday = [\"AED\", \"SAR\", \"INR\"]\ndate_format = \"%Y-%m-%d\"\n");

    let config = ReportConfig::from_file(file.path()).unwrap();

    assert_eq!(config.sunday_to_thursday, vec![Currency::AED, Currency::SAR, Currency::INR]);
    assert_eq!(config.date_format, "%Y-%m-%d");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReportConfig::from_file(dir.path().join("config.toml")).unwrap_err();

    assert!(matches!(err, ReportError::IoError(_)));
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn test_malformed_config_file() {
    let file = temp_file("sunday_to_thursday = \"AED\"\n");
    let err = ReportConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err, ReportError::ConfigError(_)));
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_invalid_field_message() {
    let err = ReportError::InvalidField {
        row: 7,
        field: "units",
        value: "-3".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid units on row 7: \"-3\"");
}
