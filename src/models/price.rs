//! Daily price observations and the validated series built from them

use crate::error::{Result, SeriesViolation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trading days in a year, used for the 52-week range
pub const TRADING_DAYS_PER_YEAR: usize = 252;
pub const TRADING_DAYS_PER_WEEK: usize = 5;
pub const TRADING_DAYS_PER_MONTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn check(&self) -> std::result::Result<(), SeriesViolation> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SeriesViolation::InvalidPrice {
                    date: self.date,
                    field,
                    value,
                });
            }
        }
        if !(self.volume.is_finite() && self.volume >= 0.0) {
            return Err(SeriesViolation::InvalidVolume {
                date: self.date,
                value: self.volume,
            });
        }
        Ok(())
    }
}

/// Ordered, validated daily observations for one ticker
///
/// Dates are strictly increasing, prices positive and finite, volume
/// non-negative. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(SeriesViolation::Empty.into());
        }
        for (index, point) in points.iter().enumerate() {
            point.check()?;
            if index > 0 {
                let previous = points[index - 1].date;
                if point.date <= previous {
                    return Err(SeriesViolation::NonIncreasingDate {
                        index,
                        date: point.date,
                        previous,
                    }
                    .into());
                }
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Index of the last trading day at or before `date`
    pub fn index_at_or_before(&self, date: NaiveDate) -> Option<usize> {
        index_at_or_before(&self.dates(), date)
    }

    pub fn summary(&self) -> PriceSummary {
        PriceSummary::from_series(self)
    }
}

/// Binary search for the last date `<= target` in an ascending slice
pub(crate) fn index_at_or_before(dates: &[NaiveDate], target: NaiveDate) -> Option<usize> {
    let after = dates.partition_point(|d| *d <= target);
    after.checked_sub(1)
}

/// Headline figures for the latest trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub date: NaiveDate,
    pub last_close: f64,
    pub volume: f64,
    pub change: Option<f64>,
    pub change_pct: Option<f64>,
    pub high_52w: f64,
    pub low_52w: f64,
    pub return_1w_pct: Option<f64>,
    pub return_1m_pct: Option<f64>,
}

impl PriceSummary {
    fn from_series(series: &PriceSeries) -> Self {
        let closes = series.closes();
        let last_index = closes.len() - 1;
        let latest = &series.points()[last_index];

        let year = &closes[closes.len().saturating_sub(TRADING_DAYS_PER_YEAR)..];
        let high_52w = year.iter().copied().fold(f64::MIN, f64::max);
        let low_52w = year.iter().copied().fold(f64::MAX, f64::min);

        let change = last_index
            .checked_sub(1)
            .map(|prev| latest.close - closes[prev]);
        let change_pct = last_index
            .checked_sub(1)
            .map(|prev| pct_change(closes[prev], latest.close));

        Self {
            date: latest.date,
            last_close: latest.close,
            volume: latest.volume,
            change,
            change_pct,
            high_52w,
            low_52w,
            return_1w_pct: period_return(&closes, TRADING_DAYS_PER_WEEK),
            return_1m_pct: period_return(&closes, TRADING_DAYS_PER_MONTH),
        }
    }
}

/// Percentage return across the last `lookback` observations
///
/// The window includes the latest close, so a lookback of 5 compares the
/// latest close with the one four trading days earlier.
pub fn period_return(closes: &[f64], lookback: usize) -> Option<f64> {
    let last = closes.len().checked_sub(1)?;
    let start = last.checked_sub(lookback.checked_sub(1)?)?;
    Some(pct_change(closes[start], closes[last]))
}

fn pct_change(from: f64, to: f64) -> f64 {
    (to - from) / from * 100.0
}
