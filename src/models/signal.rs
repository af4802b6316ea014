use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-way recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalCategory {
    Buy,
    #[serde(rename = "Hold-Cautious-Buy")]
    HoldCautiousBuy,
    Hold,
    #[serde(rename = "Hold-Cautious-Sell")]
    HoldCautiousSell,
    Sell,
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SignalCategory::Buy => "Buy",
            SignalCategory::HoldCautiousBuy => "Hold-Cautious-Buy",
            SignalCategory::Hold => "Hold",
            SignalCategory::HoldCautiousSell => "Hold-Cautious-Sell",
            SignalCategory::Sell => "Sell",
        };
        f.write_str(text)
    }
}

/// Signed lean of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tilt {
    Bullish,
    Neutral,
    Bearish,
}

impl Tilt {
    pub fn sign(&self) -> i32 {
        match self {
            Tilt::Bullish => 1,
            Tilt::Neutral => 0,
            Tilt::Bearish => -1,
        }
    }
}

/// One rule's share of the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContribution {
    pub rule: String,
    pub weight: i32,
    pub tilt: Tilt,
    pub contribution: i32,
}

/// Recommendation derived from the latest snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub category: SignalCategory,
    pub score: i32,
    pub reasons: Vec<String>,
    pub contributions: Vec<RuleContribution>,
}
