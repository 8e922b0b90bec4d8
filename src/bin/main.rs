//! Gable CLI - Run report definitions against a portfolio snapshot
//!
//! Usage:
//!   gable run <data.json> --definition <report.json> [--as-of 2026-08-06]
//!   gable validate <report.json>
//!
//! Examples:
//!   gable run portfolio.json --definition void_units.json --pretty
//!   gable validate overdue_jobs.json

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use gable::model::{PropertyRecord, RawReportDefinition};
use gable::{normalize, run};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gable")]
#[command(about = "Gable - report engine for housing portfolio data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a report definition against a snapshot file
    Run {
        /// Path to the portfolio snapshot (JSON array of properties)
        data: PathBuf,

        /// Path to the report definition JSON
        #[arg(short, long)]
        definition: PathBuf,

        /// Reference date for overdue checks (defaults to today, UTC)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Validate a report definition without executing it
    Validate {
        /// Path to the report definition JSON
        definition: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            definition,
            as_of,
            pretty,
        } => run_command(&data, &definition, as_of, pretty),
        Commands::Validate { definition } => validate_command(&definition),
    }
}

fn run_command(
    data: &Path,
    definition: &Path,
    as_of: Option<NaiveDate>,
    pretty: bool,
) -> ExitCode {
    let properties: Vec<PropertyRecord> = match load_json(data) {
        Ok(properties) => properties,
        Err(message) => return fail(&message),
    };
    let raw: RawReportDefinition = match load_json(definition) {
        Ok(raw) => raw,
        Err(message) => return fail(&message),
    };

    let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
    match run(&properties, raw, as_of) {
        Ok(report) => {
            let json = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            match json {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(err) => fail(&format!("Failed to serialize result: {}", err)),
            }
        }
        Err(err) => fail(&format!("Invalid definition: {}", err)),
    }
}

fn validate_command(definition: &Path) -> ExitCode {
    let raw: RawReportDefinition = match load_json(definition) {
        Ok(raw) => raw,
        Err(message) => return fail(&message),
    };

    match normalize(raw) {
        Ok(definition) => {
            println!(
                "OK: {} report over {}",
                definition.display_type().as_str(),
                definition.entity_type.as_str()
            );
            ExitCode::SUCCESS
        }
        Err(err) => fail(&format!("Invalid definition: {}", err)),
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    serde_json::from_str(&text)
        .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn fail(message: &str) -> ExitCode {
    eprintln!("Error: {}", message);
    ExitCode::FAILURE
}
