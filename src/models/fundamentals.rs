//! Point-in-time fundamental ratios and their qualitative reading

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundamentalField {
    Pe,
    Eps,
    Pb,
    De,
    DividendYield,
    Peg,
}

impl FundamentalField {
    pub const ALL: [FundamentalField; 6] = [
        FundamentalField::Pe,
        FundamentalField::Eps,
        FundamentalField::Pb,
        FundamentalField::De,
        FundamentalField::DividendYield,
        FundamentalField::Peg,
    ];
}

impl fmt::Display for FundamentalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FundamentalField::Pe => "P/E",
            FundamentalField::Eps => "EPS",
            FundamentalField::Pb => "P/B",
            FundamentalField::De => "D/E",
            FundamentalField::DividendYield => "Dividend Yield",
            FundamentalField::Peg => "PEG",
        };
        f.write_str(name)
    }
}

/// Fundamental ratios; every field is independently optional.
///
/// `dividend_yield` is expressed in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    #[serde(default)]
    pub pe: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub pb: Option<f64>,
    #[serde(default)]
    pub de: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub peg: Option<f64>,
}

impl FundamentalSnapshot {
    pub fn get(&self, field: FundamentalField) -> Option<f64> {
        let value = match field {
            FundamentalField::Pe => self.pe,
            FundamentalField::Eps => self.eps,
            FundamentalField::Pb => self.pb,
            FundamentalField::De => self.de,
            FundamentalField::DividendYield => self.dividend_yield,
            FundamentalField::Peg => self.peg,
        };
        value.filter(|v| v.is_finite())
    }

    pub fn require(&self, field: FundamentalField) -> Result<f64> {
        self.get(field)
            .ok_or(EngineError::MissingFundamental { field })
    }

    pub fn missing_fields(&self) -> Vec<FundamentalField> {
        FundamentalField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// Qualitative reading of the valuation ratios that have one
    pub fn assess(&self) -> FundamentalAssessment {
        let mut ratings = Vec::new();

        if let Some(pe) = self.pe.filter(|v| v.is_finite()) {
            let status = if pe <= 0.0 {
                ValuationStatus::LossMaking
            } else if pe < 15.0 {
                ValuationStatus::Undervalued
            } else if pe < 25.0 {
                ValuationStatus::FairlyValued
            } else {
                ValuationStatus::Overvalued
            };
            ratings.push(FundamentalRating::new(FundamentalField::Pe, pe, status));
        }

        if let Some(pb) = self.pb.filter(|v| v.is_finite()) {
            let status = if pb < 1.5 {
                ValuationStatus::Undervalued
            } else if pb < 3.0 {
                ValuationStatus::FairlyValued
            } else {
                ValuationStatus::Overvalued
            };
            ratings.push(FundamentalRating::new(FundamentalField::Pb, pb, status));
        }

        if let Some(yield_pct) = self.dividend_yield.filter(|v| v.is_finite()) {
            let status = if yield_pct > 3.0 {
                ValuationStatus::HighYield
            } else if yield_pct > 2.0 {
                ValuationStatus::GoodYield
            } else {
                ValuationStatus::LowYield
            };
            ratings.push(FundamentalRating::new(
                FundamentalField::DividendYield,
                yield_pct,
                status,
            ));
        }

        FundamentalAssessment {
            ratings,
            missing: self.missing_fields(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValuationStatus {
    Undervalued,
    FairlyValued,
    Overvalued,
    LossMaking,
    HighYield,
    GoodYield,
    LowYield,
}

impl fmt::Display for ValuationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ValuationStatus::Undervalued => "Undervalued",
            ValuationStatus::FairlyValued => "Fairly Valued",
            ValuationStatus::Overvalued => "Overvalued",
            ValuationStatus::LossMaking => "Loss-making",
            ValuationStatus::HighYield => "High Yield",
            ValuationStatus::GoodYield => "Good Yield",
            ValuationStatus::LowYield => "Low Yield",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalRating {
    pub field: FundamentalField,
    pub value: f64,
    pub status: ValuationStatus,
}

impl FundamentalRating {
    fn new(field: FundamentalField, value: f64, status: ValuationStatus) -> Self {
        Self {
            field,
            value,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalAssessment {
    pub ratings: Vec<FundamentalRating>,
    pub missing: Vec<FundamentalField>,
}
