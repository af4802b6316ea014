//! Batch runtime analyzing several tickers concurrently
//!
//! Each ticker runs on the blocking pool; analyses share no state.

use crate::config::IndicatorParams;
use crate::error::{EngineError, Result};
use crate::report::TickerReport;
use crate::services::market_data::TickerInput;
use crate::signals::engine::SignalEngine;
use crate::signals::sector::SectorRotation;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub params: IndicatorParams,
    pub as_of: Option<NaiveDate>,
    pub concurrency: usize,
    /// Shared by every ticker's overview
    pub sector_rotation: Option<SectorRotation>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            params: IndicatorParams::default(),
            as_of: None,
            concurrency: 4,
            sector_rotation: None,
        }
    }
}

/// Outcome for one ticker; failures do not affect the others
#[derive(Debug)]
pub struct TickerOutcome {
    pub symbol: String,
    pub result: Result<TickerReport>,
}

pub struct AnalysisRuntime {
    config: RuntimeConfig,
}

impl AnalysisRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Set custom concurrency (at least one task)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    /// Analyze every input, returning outcomes in input order
    pub async fn run(&self, inputs: Vec<TickerInput>) -> Vec<TickerOutcome> {
        let permits = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut handles = Vec::with_capacity(inputs.len());

        info!(
            tickers = inputs.len(),
            concurrency = self.config.concurrency,
            "AnalysisRuntime: starting batch"
        );

        for input in inputs {
            let permits = permits.clone();
            let params = self.config.params;
            let as_of = self.config.as_of;
            let rotation = self.config.sector_rotation.clone();
            let symbol = input.symbol.clone();

            let handle = tokio::spawn(async move {
                let _permit = permits.acquire_owned().await;
                tokio::task::spawn_blocking(move || {
                    analyze_input(&input, &params, as_of, rotation.as_ref())
                })
                .await
            });
            handles.push((symbol, handle));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (symbol, handle) in handles {
            let result = match handle.await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) | Err(e) => Err(EngineError::TaskFailed(e.to_string())),
            };
            match &result {
                Err(e) if e.is_invalid_series() => {
                    warn!(symbol = %symbol, error = %e, "rejected invalid price series")
                }
                Err(e) => error!(symbol = %symbol, error = %e, "could not analyze ticker"),
                Ok(_) => {}
            }
            outcomes.push(TickerOutcome { symbol, result });
        }
        outcomes
    }
}

/// Validate and analyze one payload
pub fn analyze_input(
    input: &TickerInput,
    params: &IndicatorParams,
    as_of: Option<NaiveDate>,
    rotation: Option<&SectorRotation>,
) -> Result<TickerReport> {
    let series = input.to_series()?;
    SignalEngine::analyze_with_sectors(&series, input.fundamentals.clone(), params, as_of, rotation)
}

/// Keep the successful reports of a batch
///
/// `load_failures` counts inputs that never reached the runtime. A batch
/// that produced no report at all is an error, whatever the cause.
pub fn collect_reports(
    outcomes: Vec<TickerOutcome>,
    load_failures: usize,
) -> Result<Vec<TickerReport>> {
    let mut reports = Vec::with_capacity(outcomes.len());
    let mut failed = load_failures;
    for outcome in outcomes {
        match outcome.result {
            Ok(report) => reports.push(report),
            Err(_) => failed += 1,
        }
    }

    info!(analyzed = reports.len(), failed, "AnalysisRuntime: batch finished");

    if reports.is_empty() {
        return Err(EngineError::NothingAnalyzed { failed });
    }
    Ok(reports)
}
