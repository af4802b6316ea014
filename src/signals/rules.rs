//! The signal rule table
//!
//! Each rule reads one relationship off a snapshot and returns a signed tilt
//! plus the observations behind it. A rule whose inputs are unavailable
//! returns a neutral tilt and names the missing indicator.

use crate::indicators::registry::IndicatorKind;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::Tilt;
use crate::signals::categories::RuleWeights;

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
/// MACD and signal closer than this fraction of their magnitude are level
pub const MACD_LEVEL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub tilt: Tilt,
    pub reasons: Vec<String>,
}

impl RuleOutcome {
    fn new(tilt: Tilt, reason: String) -> Self {
        Self {
            tilt,
            reasons: vec![reason],
        }
    }

    fn unavailable(reasons: Vec<String>) -> Self {
        Self {
            tilt: Tilt::Neutral,
            reasons,
        }
    }
}

/// A named, weighted rule
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub weight: i32,
    pub evaluate: fn(&IndicatorSnapshot) -> RuleOutcome,
}

pub const RULES: [Rule; 4] = [
    Rule {
        name: "trend_cross",
        weight: RuleWeights::TREND_CROSS,
        evaluate: trend_cross,
    },
    Rule {
        name: "price_vs_sma",
        weight: RuleWeights::PRICE_VS_SMA,
        evaluate: price_vs_sma,
    },
    Rule {
        name: "rsi_band",
        weight: RuleWeights::RSI_BAND,
        evaluate: rsi_band,
    },
    Rule {
        name: "macd_cross",
        weight: RuleWeights::MACD_CROSS,
        evaluate: macd_cross,
    },
];

fn missing(snapshot: &IndicatorSnapshot, kinds: &[IndicatorKind]) -> Vec<String> {
    kinds
        .iter()
        .filter(|k| snapshot.get(**k).is_none())
        .map(|k| format!("insufficient history for {}", snapshot.label(*k)))
        .collect()
}

/// Golden cross (short SMA above long SMA) is bullish, death cross bearish
pub fn trend_cross(snapshot: &IndicatorSnapshot) -> RuleOutcome {
    let short = snapshot.label(IndicatorKind::SmaShort);
    let long = snapshot.label(IndicatorKind::SmaLong);

    match (snapshot.sma50, snapshot.sma200) {
        (Some(fast), Some(slow)) if fast > slow => RuleOutcome::new(
            Tilt::Bullish,
            format!("Golden cross: {} ({:.2}) above {} ({:.2})", short, fast, long, slow),
        ),
        (Some(fast), Some(slow)) if fast < slow => RuleOutcome::new(
            Tilt::Bearish,
            format!("Death cross: {} ({:.2}) below {} ({:.2})", short, fast, long, slow),
        ),
        (Some(fast), Some(_)) => RuleOutcome::new(
            Tilt::Neutral,
            format!("{} level with {} at {:.2}", short, long, fast),
        ),
        _ => RuleOutcome::unavailable(missing(
            snapshot,
            &[IndicatorKind::SmaShort, IndicatorKind::SmaLong],
        )),
    }
}

/// Close above the short SMA leans bullish
pub fn price_vs_sma(snapshot: &IndicatorSnapshot) -> RuleOutcome {
    let short = snapshot.label(IndicatorKind::SmaShort);

    let Some(close) = snapshot.close else {
        return RuleOutcome::unavailable(vec![format!(
            "no price data on or before {}",
            snapshot.requested
        )]);
    };

    match snapshot.sma50 {
        Some(sma) if close > sma => RuleOutcome::new(
            Tilt::Bullish,
            format!("Price ({:.2}) above {} ({:.2}): potential uptrend", close, short, sma),
        ),
        Some(sma) if close < sma => RuleOutcome::new(
            Tilt::Bearish,
            format!("Price ({:.2}) below {} ({:.2}): potential downtrend", close, short, sma),
        ),
        Some(sma) => RuleOutcome::new(
            Tilt::Neutral,
            format!("Price ({:.2}) at {} ({:.2})", close, short, sma),
        ),
        None => RuleOutcome::unavailable(missing(snapshot, &[IndicatorKind::SmaShort])),
    }
}

/// RSI above 70 is overbought (bearish), below 30 oversold (bullish)
pub fn rsi_band(snapshot: &IndicatorSnapshot) -> RuleOutcome {
    let label = snapshot.label(IndicatorKind::Rsi);

    match snapshot.rsi14 {
        Some(rsi) if rsi > RSI_OVERBOUGHT => RuleOutcome::new(
            Tilt::Bearish,
            format!("{} overbought at {:.2}", label, rsi),
        ),
        Some(rsi) if rsi < RSI_OVERSOLD => RuleOutcome::new(
            Tilt::Bullish,
            format!("{} oversold at {:.2}", label, rsi),
        ),
        Some(rsi) => RuleOutcome::new(Tilt::Neutral, format!("{} neutral at {:.2}", label, rsi)),
        None => RuleOutcome::unavailable(missing(snapshot, &[IndicatorKind::Rsi])),
    }
}

/// MACD line above its signal line is bullish; the histogram adds context
pub fn macd_cross(snapshot: &IndicatorSnapshot) -> RuleOutcome {
    let (Some(line), Some(signal)) = (snapshot.macd_line, snapshot.macd_signal) else {
        return RuleOutcome::unavailable(missing(
            snapshot,
            &[IndicatorKind::MacdLine, IndicatorKind::MacdSignal],
        ));
    };

    let diff = line - signal;
    let level = macd_level(line, signal);
    let mut outcome = if level {
        RuleOutcome::new(
            Tilt::Neutral,
            format!("MACD line level with signal line ({:.4})", line),
        )
    } else if diff > 0.0 {
        RuleOutcome::new(
            Tilt::Bullish,
            format!("MACD line ({:.4}) above signal line ({:.4})", line, signal),
        )
    } else {
        RuleOutcome::new(
            Tilt::Bearish,
            format!("MACD line ({:.4}) below signal line ({:.4})", line, signal),
        )
    };

    if let Some(hist) = snapshot.macd_hist {
        let reason = if level {
            format!("MACD histogram flat ({:.4})", hist)
        } else {
            let sign = if hist > 0.0 { "positive" } else { "negative" };
            match snapshot.macd_hist_prev {
                Some(prev) if hist > prev => {
                    format!("MACD histogram {} and rising ({:.4})", sign, hist)
                }
                Some(prev) if hist < prev => {
                    format!("MACD histogram {} and falling ({:.4})", sign, hist)
                }
                _ => format!("MACD histogram {} ({:.4})", sign, hist),
            }
        };
        outcome.reasons.push(reason);
    }

    outcome
}

/// Level when the gap is float noise relative to the lines themselves
pub fn macd_level(line: f64, signal: f64) -> bool {
    let scale = line.abs().max(signal.abs()).max(1.0);
    (line - signal).abs() <= MACD_LEVEL_TOLERANCE * scale
}
