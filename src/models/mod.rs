//! Shared data models spanning the engine layers.

pub mod fundamentals;
pub mod indicators;
pub mod price;
pub mod signal;

pub use fundamentals::{
    FundamentalAssessment, FundamentalField, FundamentalRating, FundamentalSnapshot,
    ValuationStatus,
};
pub use indicators::{
    snapshot_at, BollingerSeries, IndicatorSeries, IndicatorSet, IndicatorSnapshot, MacdSeries,
};
pub use price::{PricePoint, PriceSeries, PriceSummary};
pub use signal::{RuleContribution, Signal, SignalCategory, Tilt};
