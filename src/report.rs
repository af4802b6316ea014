//! Output handed to the report renderer, and the display helpers it uses
//!
//! Absent values stay `None` all the way here; only the `format_*` helpers
//! turn them into the "N/A" placeholder.

use crate::models::fundamentals::{FundamentalAssessment, FundamentalSnapshot};
use crate::models::indicators::{IndicatorSet, IndicatorSnapshot};
use crate::models::price::PriceSummary;
use crate::models::signal::Signal;
use crate::signals::overview::MarketOverview;
use crate::signals::sector::SectorAnalysis;
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    pub symbol: String,
    pub summary: PriceSummary,
    /// Full series, for charting
    pub indicators: IndicatorSet,
    pub latest: IndicatorSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical: Option<IndicatorSnapshot>,
    pub signal: Signal,
    pub overview: MarketOverview,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fundamentals: Option<FundamentalSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fundamental_assessment: Option<FundamentalAssessment>,
}

/// Everything one run hands to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub reports: Vec<TickerReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectors: Option<SectorAnalysis>,
}

/// Number with thousands separators, e.g. `1,234.57`
pub fn format_number(value: Option<f64>, precision: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => group_thousands(&format!("{:.*}", precision, v)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Rounded integer with thousands separators, e.g. `1,234,568`
pub fn format_integer(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => group_thousands(&format!("{:.0}", v.round())),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Fraction rendered as a percentage, e.g. `0.0123` → `1.23%`
///
/// For ratios such as a raw return. Fields already in percent
/// (`change_pct`, `return_*_pct`, `dividend_yield`) go through
/// [`format_percent`].
pub fn format_percentage(value: Option<f64>, precision: usize) -> String {
    format_percent(value.map(|v| v * 100.0), precision)
}

/// Value already in percent, e.g. `1.23` → `1.23%`
pub fn format_percent(value: Option<f64>, precision: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.*}%", precision, v),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
