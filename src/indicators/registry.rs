//! Indicator kinds, their labels and lookback requirements

use crate::config::IndicatorParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every derived series in an [`IndicatorSet`](crate::models::IndicatorSet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    SmaShort,
    SmaLong,
    Rsi,
    MacdLine,
    MacdSignal,
    MacdHistogram,
    BollingerUpper,
    BollingerMiddle,
    BollingerLower,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 9] = [
        IndicatorKind::SmaShort,
        IndicatorKind::SmaLong,
        IndicatorKind::Rsi,
        IndicatorKind::MacdLine,
        IndicatorKind::MacdSignal,
        IndicatorKind::MacdHistogram,
        IndicatorKind::BollingerUpper,
        IndicatorKind::BollingerMiddle,
        IndicatorKind::BollingerLower,
    ];

    /// Observations needed before the first value is defined
    pub fn lookback(&self, params: &IndicatorParams) -> usize {
        match self {
            IndicatorKind::SmaShort => params.sma_short,
            IndicatorKind::SmaLong => params.sma_long,
            // one delta per observation after the first
            IndicatorKind::Rsi => params.rsi_period + 1,
            IndicatorKind::MacdLine => params.macd_slow,
            IndicatorKind::MacdSignal | IndicatorKind::MacdHistogram => {
                params.macd_slow + params.macd_signal - 1
            }
            IndicatorKind::BollingerUpper
            | IndicatorKind::BollingerMiddle
            | IndicatorKind::BollingerLower => params.bb_period,
        }
    }

    /// Human label, e.g. "SMA200" or "RSI14"
    pub fn label(&self, params: &IndicatorParams) -> String {
        match self {
            IndicatorKind::SmaShort => format!("SMA{}", params.sma_short),
            IndicatorKind::SmaLong => format!("SMA{}", params.sma_long),
            IndicatorKind::Rsi => format!("RSI{}", params.rsi_period),
            IndicatorKind::MacdLine => "MACD line".to_string(),
            IndicatorKind::MacdSignal => "MACD signal".to_string(),
            IndicatorKind::MacdHistogram => "MACD histogram".to_string(),
            IndicatorKind::BollingerUpper => "Bollinger upper band".to_string(),
            IndicatorKind::BollingerMiddle => "Bollinger middle band".to_string(),
            IndicatorKind::BollingerLower => "Bollinger lower band".to_string(),
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(&IndicatorParams::default()))
    }
}
