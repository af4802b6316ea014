//! Sector rotation across a batch of sector index series
//!
//! Each sector is ranked on its 1-week and 1-month return. The share of
//! sectors with a positive week sets the rotation label, which the market
//! overview counts as one more vote.

use crate::models::price::PriceSeries;
use crate::models::signal::Tilt;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Positive-week share above which rotation is bullish
const BULLISH_SHARE: f64 = 0.6;
/// Positive-week share below which rotation is bearish
const BEARISH_SHARE: f64 = 0.4;

/// A sector name and the index series that tracks it
#[derive(Debug, Clone)]
pub struct SectorSeries {
    pub sector: String,
    pub series: PriceSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    pub sector: String,
    pub symbol: String,
    pub latest_close: f64,
    pub return_1w_pct: Option<f64>,
    pub return_1m_pct: Option<f64>,
}

impl SectorPerformance {
    pub fn from_series(sector: &str, series: &PriceSeries) -> Self {
        let summary = series.summary();
        Self {
            sector: sector.to_string(),
            symbol: series.symbol().to_string(),
            latest_close: summary.last_close,
            return_1w_pct: summary.return_1w_pct,
            return_1m_pct: summary.return_1m_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationTrend {
    BullishRotation,
    BearishRotation,
    MixedRotation,
}

impl RotationTrend {
    pub fn lean(&self) -> Tilt {
        match self {
            RotationTrend::BullishRotation => Tilt::Bullish,
            RotationTrend::BearishRotation => Tilt::Bearish,
            RotationTrend::MixedRotation => Tilt::Neutral,
        }
    }
}

impl fmt::Display for RotationTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RotationTrend::BullishRotation => "Bullish Rotation - Most sectors performing well",
            RotationTrend::BearishRotation => "Bearish Rotation - Most sectors underperforming",
            RotationTrend::MixedRotation => "Mixed Rotation - Sectors divided in performance",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRotation {
    pub top_performer_week: Option<String>,
    pub bottom_performer_week: Option<String>,
    pub top_performer_month: Option<String>,
    pub bottom_performer_month: Option<String>,
    pub trend: RotationTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAnalysis {
    pub performance: Vec<SectorPerformance>,
    /// `None` when no sector has a full week of history
    pub rotation: Option<SectorRotation>,
}

/// Rank sectors and label the rotation
///
/// Sectors too short for a return are listed but left out of that ranking.
/// Ties go to the sector listed first.
pub fn analyze_sectors(sectors: &[SectorSeries]) -> SectorAnalysis {
    let performance: Vec<SectorPerformance> = sectors
        .iter()
        .map(|s| SectorPerformance::from_series(&s.sector, &s.series))
        .collect();

    for p in performance.iter().filter(|p| p.return_1w_pct.is_none()) {
        debug!(sector = %p.sector, symbol = %p.symbol, "sector skipped: less than a week of history");
    }

    let rotation = rotation_trend(&performance).map(|trend| {
        let (top_week, bottom_week) = extremes(&performance, |p| p.return_1w_pct);
        let (top_month, bottom_month) = extremes(&performance, |p| p.return_1m_pct);
        SectorRotation {
            top_performer_week: top_week,
            bottom_performer_week: bottom_week,
            top_performer_month: top_month,
            bottom_performer_month: bottom_month,
            trend,
        }
    });

    if let Some(rotation) = &rotation {
        info!(
            sectors = performance.len(),
            trend = ?rotation.trend,
            top_week = ?rotation.top_performer_week,
            "sector rotation derived"
        );
    }

    SectorAnalysis {
        performance,
        rotation,
    }
}

/// Rotation label from the share of sectors with a positive week
pub fn rotation_trend(performance: &[SectorPerformance]) -> Option<RotationTrend> {
    let weekly: Vec<f64> = performance.iter().filter_map(|p| p.return_1w_pct).collect();
    if weekly.is_empty() {
        return None;
    }
    let positive = weekly.iter().filter(|r| **r > 0.0).count();
    let share = positive as f64 / weekly.len() as f64;

    Some(if share > BULLISH_SHARE {
        RotationTrend::BullishRotation
    } else if share < BEARISH_SHARE {
        RotationTrend::BearishRotation
    } else {
        RotationTrend::MixedRotation
    })
}

fn extremes(
    performance: &[SectorPerformance],
    metric: impl Fn(&SectorPerformance) -> Option<f64>,
) -> (Option<String>, Option<String>) {
    let mut top: Option<(&str, f64)> = None;
    let mut bottom: Option<(&str, f64)> = None;

    for p in performance {
        let Some(value) = metric(p) else {
            continue;
        };
        if top.map_or(true, |(_, best)| value > best) {
            top = Some((p.sector.as_str(), value));
        }
        if bottom.map_or(true, |(_, worst)| value < worst) {
            bottom = Some((p.sector.as_str(), value));
        }
    }

    (
        top.map(|(s, _)| s.to_string()),
        bottom.map(|(s, _)| s.to_string()),
    )
}
