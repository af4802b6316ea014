//! Rule weights and the score-to-category thresholds
//!
//! Both are fixed constants: the same snapshot always maps to the same
//! category.

use crate::models::signal::SignalCategory;

/// Weight applied to each rule's signed tilt
pub struct RuleWeights;

impl RuleWeights {
    /// SMA short vs SMA long (golden/death cross)
    pub const TREND_CROSS: i32 = 2;
    /// Close vs SMA short
    pub const PRICE_VS_SMA: i32 = 1;
    /// RSI overbought/oversold band
    pub const RSI_BAND: i32 = 1;
    /// MACD line vs signal line
    pub const MACD_CROSS: i32 = 1;

    /// Largest absolute score the rule table can produce
    pub fn max_score() -> i32 {
        Self::TREND_CROSS + Self::PRICE_VS_SMA + Self::RSI_BAND + Self::MACD_CROSS
    }
}

/// Score boundaries for the five categories
pub struct ScoreThresholds;

impl ScoreThresholds {
    pub const BUY_MIN: i32 = 2;
    pub const SELL_MAX: i32 = -2;

    pub fn classify(score: i32) -> SignalCategory {
        if score >= Self::BUY_MIN {
            SignalCategory::Buy
        } else if score <= Self::SELL_MAX {
            SignalCategory::Sell
        } else if score > 0 {
            SignalCategory::HoldCautiousBuy
        } else if score < 0 {
            SignalCategory::HoldCautiousSell
        } else {
            SignalCategory::Hold
        }
    }
}
