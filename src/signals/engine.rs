//! Signal engine: indicators, snapshots and the recommendation for one ticker

use crate::config::IndicatorParams;
use crate::error::Result;
use crate::models::fundamentals::FundamentalSnapshot;
use crate::models::indicators::{IndicatorSet, IndicatorSnapshot};
use crate::models::price::PriceSeries;
use crate::models::signal::Signal;
use crate::report::TickerReport;
use crate::signals::aggregation::Aggregator;
use crate::signals::overview::MarketOverview;
use crate::signals::rules::RULES;
use crate::signals::sector::SectorRotation;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Run every rule against a snapshot and combine the results
///
/// Pure and deterministic: identical snapshots give identical signals.
pub fn derive_signal(snapshot: &IndicatorSnapshot) -> Signal {
    let results: Vec<_> = RULES
        .iter()
        .map(|rule| (*rule, (rule.evaluate)(snapshot)))
        .collect();
    Aggregator::combine(&results)
}

pub struct SignalEngine;

impl SignalEngine {
    pub fn compute_indicators(series: &PriceSeries, params: &IndicatorParams) -> Result<IndicatorSet> {
        IndicatorSet::compute(series, params)
    }

    /// Full per-ticker analysis
    ///
    /// The signal always comes from the latest snapshot; `as_of` only adds a
    /// retrospective snapshot to the report.
    pub fn analyze(
        series: &PriceSeries,
        fundamentals: Option<FundamentalSnapshot>,
        params: &IndicatorParams,
        as_of: Option<NaiveDate>,
    ) -> Result<TickerReport> {
        Self::analyze_with_sectors(series, fundamentals, params, as_of, None)
    }

    /// [`analyze`](Self::analyze) with the sector rotation voting in the overview
    ///
    /// The rotation never changes the signal.
    pub fn analyze_with_sectors(
        series: &PriceSeries,
        fundamentals: Option<FundamentalSnapshot>,
        params: &IndicatorParams,
        as_of: Option<NaiveDate>,
        rotation: Option<&SectorRotation>,
    ) -> Result<TickerReport> {
        let indicators = Self::compute_indicators(series, params)?;
        let summary = series.summary();
        let latest = indicators.snapshot_at(summary.date);
        let historical = as_of.map(|date| indicators.snapshot_at(date));

        let signal = derive_signal(&latest);
        let overview = MarketOverview::with_sector_trend(&latest, rotation);

        if let Some(snapshot) = &historical {
            debug!(
                symbol = %series.symbol(),
                requested = %snapshot.requested,
                trading_date = ?snapshot.trading_date,
                "historical snapshot resolved"
            );
        }

        info!(
            symbol = %series.symbol(),
            observations = series.len(),
            category = %signal.category,
            score = signal.score,
            overall = %overview.overall,
            "signal derived"
        );

        let fundamental_assessment = fundamentals.as_ref().map(FundamentalSnapshot::assess);

        Ok(TickerReport {
            symbol: series.symbol().to_string(),
            summary,
            indicators,
            latest,
            historical,
            signal,
            overview,
            fundamentals,
            fundamental_assessment,
        })
    }
}
