//! Qualitative per-indicator reading and an overall trend label

use crate::indicators::registry::IndicatorKind;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::Tilt;
use crate::signals::rules::{macd_level, RSI_OVERBOUGHT, RSI_OVERSOLD};
use crate::signals::sector::SectorRotation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of weight above which one side sets the overall trend
const DOMINANT_SHARE: f64 = 0.6;
/// Neutral readings at or above this count mean a sideways market
const SIDEWAYS_NEUTRAL_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub indicator: String,
    pub lean: Tilt,
    pub status: String,
}

impl IndicatorReading {
    fn new(indicator: &str, lean: Tilt, status: &str) -> Self {
        Self {
            indicator: indicator.to_string(),
            lean,
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallTrend {
    BullishTrend,
    BearishTrend,
    SidewaysMovement,
    MixedSignals,
}

impl fmt::Display for OverallTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OverallTrend::BullishTrend => "Bullish Trend",
            OverallTrend::BearishTrend => "Bearish Trend",
            OverallTrend::SidewaysMovement => "Sideways Movement",
            OverallTrend::MixedSignals => "Mixed Signals",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOverview {
    pub readings: Vec<IndicatorReading>,
    pub overall: OverallTrend,
}

impl MarketOverview {
    pub fn from_snapshot(snapshot: &IndicatorSnapshot) -> Self {
        Self::with_sector_trend(snapshot, None)
    }

    /// Overview with the sector rotation as a fifth vote
    ///
    /// Without a rotation the vote is left out rather than counted neutral.
    pub fn with_sector_trend(
        snapshot: &IndicatorSnapshot,
        rotation: Option<&SectorRotation>,
    ) -> Self {
        let mut readings = vec![
            sma_reading(snapshot),
            rsi_reading(snapshot),
            macd_reading(snapshot),
            bollinger_reading(snapshot),
        ];
        if let Some(rotation) = rotation {
            readings.push(IndicatorReading::new(
                "Sector Trend",
                rotation.trend.lean(),
                &rotation.trend.to_string(),
            ));
        }
        let overall = overall_trend(&readings);
        Self { readings, overall }
    }
}

const INSUFFICIENT: &str = "Insufficient data";

fn sma_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let name = "SMA";
    match (snapshot.sma50, snapshot.sma200) {
        (Some(fast), Some(slow)) if fast > slow => {
            IndicatorReading::new(name, Tilt::Bullish, "Bullish (Golden Cross)")
        }
        (Some(fast), Some(slow)) if fast < slow => {
            IndicatorReading::new(name, Tilt::Bearish, "Bearish (Death Cross)")
        }
        (Some(_), Some(_)) => IndicatorReading::new(name, Tilt::Neutral, "Neutral"),
        _ => IndicatorReading::new(name, Tilt::Neutral, INSUFFICIENT),
    }
}

fn rsi_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let name = snapshot.label(IndicatorKind::Rsi);
    match snapshot.rsi14 {
        Some(rsi) if rsi < RSI_OVERSOLD => IndicatorReading::new(&name, Tilt::Bullish, "Oversold"),
        Some(rsi) if rsi > RSI_OVERBOUGHT => {
            IndicatorReading::new(&name, Tilt::Bearish, "Overbought")
        }
        Some(_) => IndicatorReading::new(&name, Tilt::Neutral, "Neutral"),
        None => IndicatorReading::new(&name, Tilt::Neutral, INSUFFICIENT),
    }
}

fn macd_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let name = "MACD";
    match (snapshot.macd_line, snapshot.macd_signal) {
        (Some(line), Some(signal)) if macd_level(line, signal) => {
            IndicatorReading::new(name, Tilt::Neutral, "Neutral")
        }
        (Some(line), Some(signal)) if line > signal => {
            IndicatorReading::new(name, Tilt::Bullish, "Bullish (MACD above Signal)")
        }
        (Some(line), Some(signal)) if line < signal => {
            IndicatorReading::new(name, Tilt::Bearish, "Bearish (MACD below Signal)")
        }
        (Some(_), Some(_)) => IndicatorReading::new(name, Tilt::Neutral, "Neutral"),
        _ => IndicatorReading::new(name, Tilt::Neutral, INSUFFICIENT),
    }
}

/// Close outside the bands reads as stretched, not as a trend
fn bollinger_reading(snapshot: &IndicatorSnapshot) -> IndicatorReading {
    let name = "Bollinger Bands";
    match (snapshot.close, snapshot.bb_upper, snapshot.bb_lower) {
        (Some(close), Some(upper), Some(_)) if close > upper => {
            IndicatorReading::new(name, Tilt::Bearish, "Overbought (Above Upper Band)")
        }
        (Some(close), Some(_), Some(lower)) if close < lower => {
            IndicatorReading::new(name, Tilt::Bullish, "Oversold (Below Lower Band)")
        }
        (Some(_), Some(_), Some(_)) => {
            IndicatorReading::new(name, Tilt::Neutral, "Neutral (Within Bands)")
        }
        _ => IndicatorReading::new(name, Tilt::Neutral, INSUFFICIENT),
    }
}

/// Equal-weight vote across the readings
pub fn overall_trend(readings: &[IndicatorReading]) -> OverallTrend {
    if readings.is_empty() {
        return OverallTrend::MixedSignals;
    }
    let total = readings.len() as f64;
    let bullish = readings.iter().filter(|r| r.lean == Tilt::Bullish).count();
    let bearish = readings.iter().filter(|r| r.lean == Tilt::Bearish).count();
    let neutral = readings.len() - bullish - bearish;

    if bullish as f64 / total > DOMINANT_SHARE {
        OverallTrend::BullishTrend
    } else if bearish as f64 / total > DOMINANT_SHARE {
        OverallTrend::BearishTrend
    } else if neutral >= SIDEWAYS_NEUTRAL_COUNT {
        OverallTrend::SidewaysMovement
    } else {
        OverallTrend::MixedSignals
    }
}
