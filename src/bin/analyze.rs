//! Stocklens analyzer
//!
//! Reads one JSON payload per ticker, runs the indicator and signal engine
//! over each, and prints the reports (plus the sector rotation when sector
//! payloads are given) as JSON on stdout.

use chrono::NaiveDate;
use clap::Parser;
use dotenvy::dotenv;
use std::path::{Path, PathBuf};
use stocklens::config::{get_environment, IndicatorParams};
use stocklens::core::runtime::{collect_reports, AnalysisRuntime, RuntimeConfig};
use stocklens::logging;
use stocklens::report::BatchReport;
use stocklens::services::market_data::{parse_sector_inputs, parse_ticker_input};
use stocklens::signals::sector::{analyze_sectors, SectorAnalysis};
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "analyze")]
struct Args {
    /// Ticker payload files (`{"symbol", "prices", "fundamentals"}`)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Also report indicator values as of this date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Sector index payloads (JSON array of `{"sector", "symbol", "prices"}`)
    #[arg(long)]
    sectors: Option<PathBuf>,

    /// Maximum tickers analyzed at once
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args = Args::parse();
    let env = get_environment();
    info!(environment = %env, inputs = args.inputs.len(), "Starting Stocklens analyzer");

    let params = IndicatorParams::from_env()?;

    let sectors = match &args.sectors {
        Some(path) => load_sectors(path).await,
        None => None,
    };

    let mut inputs = Vec::with_capacity(args.inputs.len());
    let mut load_failures = 0usize;
    for path in &args.inputs {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                load_failures += 1;
                error!(path = %path.display(), error = %e, "failed to read input");
                continue;
            }
        };
        match parse_ticker_input(&raw) {
            Ok(input) => inputs.push(input),
            Err(e) => {
                load_failures += 1;
                error!(path = %path.display(), error = %e, "failed to parse input");
            }
        }
    }

    let runtime = AnalysisRuntime::new(RuntimeConfig {
        params,
        as_of: args.as_of,
        concurrency: args.concurrency,
        sector_rotation: sectors.as_ref().and_then(|s| s.rotation.clone()),
    })
    .with_concurrency(args.concurrency);

    let outcomes = runtime.run(inputs).await;
    let reports = collect_reports(outcomes, load_failures)?;

    let batch = BatchReport { reports, sectors };
    let output = if args.pretty {
        serde_json::to_string_pretty(&batch)?
    } else {
        serde_json::to_string(&batch)?
    };
    println!("{}", output);

    info!(analyzed = batch.reports.len(), "Stocklens analyzer finished");
    Ok(())
}

/// Sector rotation is optional: a bad sector file is logged and skipped
async fn load_sectors(path: &Path) -> Option<SectorAnalysis> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read sector input");
            return None;
        }
    };
    let inputs = match parse_sector_inputs(&raw) {
        Ok(inputs) => inputs,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to parse sector input");
            return None;
        }
    };

    let mut series = Vec::with_capacity(inputs.len());
    for input in &inputs {
        match input.to_series() {
            Ok(sector) => series.push(sector),
            Err(e) => warn!(sector = %input.sector, error = %e, "rejected sector series"),
        }
    }
    Some(analyze_sectors(&series))
}
