//! settlement-report CLI - print the daily settlement report
//!
//! ## Example Usage
//!
//! ```bash
//! # Report over the built-in reference batch
//! settlement-report sample
//!
//! # Report over a CSV batch, as JSON
//! settlement-report run instructions.csv --format json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use settlement_report::aggregation::DailyTotals;
use settlement_report::calendar::format_date;
use settlement_report::config::ReportConfig;
use settlement_report::error::Result as ReportResult;
use settlement_report::instruction::{RawInstruction, ValidatedInstruction};
use settlement_report::loader::InstructionCsvReader;
use settlement_report::ranking::EntityRanking;
use settlement_report::report::Report;
use settlement_report::sample::reference_instructions;
use std::path::{Path, PathBuf};
use std::process;

/// settlement-report: daily FX settlement instruction report
#[derive(Parser)]
#[command(name = "settlement-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Daily FX settlement instruction report", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report over the built-in reference batch
    Sample,

    /// Report over instructions read from a CSV file
    Run {
        /// CSV file with one instruction per row
        #[arg(value_name = "CSV_FILE")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load_config(path: Option<&Path>) -> ReportResult<ReportConfig> {
    if let Some(path) = path {
        return ReportConfig::from_file(path);
    }

    // Fall back to the per-user location, then to defaults
    if let Some(home) = dirs::home_dir() {
        let default_config = home.join(".settlement-report").join("config.toml");
        if default_config.exists() {
            return ReportConfig::from_file(default_config);
        }
    }

    Ok(ReportConfig::default())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> ReportResult<()> {
    let config = load_config(cli.config.as_deref())?;

    if cli.verbose {
        println!(
            "{} v{}",
            "settlement-report".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        let gulf: Vec<String> = config.sunday_to_thursday.iter().map(|c| c.to_string()).collect();
        println!("Sunday-Thursday currencies: {}", gulf.join(", ").dimmed());
    }

    let instructions: Vec<RawInstruction> = match &cli.command {
        Commands::Sample => reference_instructions(),
        Commands::Run { input } => InstructionCsvReader::with_config(&config).load_path(input)?,
    };

    let report = Report::with_config(&instructions, &config);

    match cli.format {
        Format::Json => println!("{}", report.to_json()?),
        Format::Text => print_report(&report, cli.verbose),
    }

    Ok(())
}

fn print_report(report: &Report, verbose: bool) {
    println!(
        "Total Number of Valid Received Instructions: {}",
        report.valid_instructions().len()
    );
    println!(
        "Total Number of Valid Received Incoming Instructions: {}",
        report.incoming_instructions().len()
    );
    println!(
        "Total Number of Valid Received Outgoing Instructions: {}",
        report.outgoing_instructions().len()
    );

    if verbose && !report.invalid_instructions().is_empty() {
        println!("\n{}", "Rejected Instructions:".yellow().bold());
        for rejected in report.invalid_instructions() {
            println!(
                "  {} [{}]: {}",
                rejected.instruction.entity,
                rejected.reason.category(),
                rejected.reason
            );
        }
    }

    println!("\n{}\n", "Valid Incoming Instructions as follows:".bold());
    for instruction in report.incoming_instructions() {
        print_instruction(instruction);
    }

    println!("{}\n", "Valid Outgoing Instructions as follows:".bold());
    for instruction in report.outgoing_instructions() {
        print_instruction(instruction);
    }

    println!("{}", "Ranking of entities based on incoming amount:".bold());
    print_rankings(report.incoming_rankings());

    println!("\n{}", "Ranking of entities based on outgoing amount:".bold());
    print_rankings(report.outgoing_rankings());

    println!("\n{}", "Total amount in USD settled incoming everyday".bold());
    print_daily_totals(&report.incoming_daily_totals());

    println!("\n{}", "Total amount in USD settled outgoing everyday".bold());
    print_daily_totals(&report.outgoing_daily_totals());
}

fn print_instruction(instruction: &ValidatedInstruction) {
    let raw = instruction.raw();
    println!("Entity:                 {}", raw.entity.cyan());
    println!("Buy/Sell:               {}", instruction.side());
    println!("Agreed FX:              {}", raw.exchange_rate);
    println!("Currency:               {}", instruction.currency());
    println!("Instruction Date:       {}", display_date(raw.instruction_date));
    println!("Settlement Date:        {}", display_date(raw.settlement_date));
    println!(
        "Actual Settlement Date: {}",
        display_date(instruction.actual_settlement_date())
    );
    println!("Units:                  {}", raw.units);
    println!("Price per unit:         {}", raw.price_per_unit);
    println!("USD amount:             {}", instruction.usd_amount());
    println!();
}

fn print_rankings(rankings: &[EntityRanking]) {
    for ranking in rankings {
        println!("{}", ranking);
    }
}

fn print_daily_totals(totals: &DailyTotals) {
    for (date, total) in totals {
        println!("Date:\t{}\t Total:\t{}", display_date(*date), total);
    }
}

fn display_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "unknown".to_string())
}
