//! Engine error taxonomy

use crate::indicators::registry::IndicatorKind;
use crate::models::fundamentals::FundamentalField;
use chrono::NaiveDate;
use thiserror::Error;

/// Why a price series was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesViolation {
    #[error("series is empty")]
    Empty,

    #[error("date {date} at index {index} does not follow {previous}")]
    NonIncreasingDate {
        index: usize,
        date: NaiveDate,
        previous: NaiveDate,
    },

    #[error("{field} price {value} on {date} is not a positive finite number")]
    InvalidPrice {
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },

    #[error("volume {value} on {date} is negative or not finite")]
    InvalidVolume { date: NaiveDate, value: f64 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid price series: {0}")]
    InvalidSeries(#[from] SeriesViolation),

    #[error("insufficient history for {indicator}: need {required} observations, have {available}")]
    InsufficientHistory {
        indicator: IndicatorKind,
        required: usize,
        available: usize,
    },

    #[error("missing fundamental: {field}")]
    MissingFundamental { field: FundamentalField },

    #[error("invalid indicator parameter: {0}")]
    InvalidParameter(String),

    #[error("analysis task failed: {0}")]
    TaskFailed(String),

    #[error("no ticker could be analyzed ({failed} failed)")]
    NothingAnalyzed { failed: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// True when the error means the input itself is bad, as opposed to merely short
    pub fn is_invalid_series(&self) -> bool {
        matches!(self, EngineError::InvalidSeries(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
