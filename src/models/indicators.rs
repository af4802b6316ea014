use crate::config::IndicatorParams;
use crate::error::{EngineError, Result};
use crate::indicators::momentum::{compute_macd, compute_rsi};
use crate::indicators::registry::IndicatorKind;
use crate::indicators::trend::compute_sma;
use crate::indicators::volatility::compute_bollinger;
use crate::models::price::{index_at_or_before, PriceSeries};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-observation indicator values; `None` before the lookback is filled
pub type IndicatorSeries = Vec<Option<f64>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub line: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Full derived series for one ticker, aligned to its price series dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub symbol: String,
    pub params: IndicatorParams,
    pub dates: Vec<NaiveDate>,
    pub closes: Vec<f64>,
    pub sma50: IndicatorSeries,
    pub sma200: IndicatorSeries,
    pub rsi14: IndicatorSeries,
    pub macd_line: IndicatorSeries,
    pub macd_signal: IndicatorSeries,
    pub macd_hist: IndicatorSeries,
    pub bb_upper: IndicatorSeries,
    pub bb_mid: IndicatorSeries,
    pub bb_lower: IndicatorSeries,
}

impl IndicatorSet {
    pub fn compute(series: &PriceSeries, params: &IndicatorParams) -> Result<Self> {
        params.validate()?;

        let closes = series.closes();
        let macd = compute_macd(&closes, params.macd_fast, params.macd_slow, params.macd_signal);
        let bands = compute_bollinger(&closes, params.bb_period, params.bb_std_dev);

        let set = Self {
            symbol: series.symbol().to_string(),
            params: *params,
            dates: series.dates(),
            sma50: compute_sma(&closes, params.sma_short),
            sma200: compute_sma(&closes, params.sma_long),
            rsi14: compute_rsi(&closes, params.rsi_period),
            macd_line: macd.line,
            macd_signal: macd.signal,
            macd_hist: macd.histogram,
            bb_upper: bands.upper,
            bb_mid: bands.middle,
            bb_lower: bands.lower,
            closes,
        };

        for kind in IndicatorKind::ALL {
            if set.first_defined(kind).is_none() {
                debug!(
                    symbol = %set.symbol,
                    indicator = %kind.label(params),
                    required = kind.lookback(params),
                    available = set.len(),
                    "indicator unavailable: insufficient history"
                );
            }
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn series(&self, kind: IndicatorKind) -> &[Option<f64>] {
        match kind {
            IndicatorKind::SmaShort => &self.sma50,
            IndicatorKind::SmaLong => &self.sma200,
            IndicatorKind::Rsi => &self.rsi14,
            IndicatorKind::MacdLine => &self.macd_line,
            IndicatorKind::MacdSignal => &self.macd_signal,
            IndicatorKind::MacdHistogram => &self.macd_hist,
            IndicatorKind::BollingerUpper => &self.bb_upper,
            IndicatorKind::BollingerMiddle => &self.bb_mid,
            IndicatorKind::BollingerLower => &self.bb_lower,
        }
    }

    /// Date of the first defined value of an indicator
    pub fn first_defined(&self, kind: IndicatorKind) -> Option<NaiveDate> {
        self.series(kind)
            .iter()
            .position(Option::is_some)
            .map(|i| self.dates[i])
    }

    /// Point-in-time values as of `date`
    ///
    /// Each field holds the latest defined value on the last trading day at
    /// or before `date`. Dates before the series start, or before an
    /// indicator's lookback is filled, yield `None`.
    pub fn snapshot_at(&self, date: NaiveDate) -> IndicatorSnapshot {
        let index = index_at_or_before(&self.dates, date);
        let lookup = |kind: IndicatorKind| index.and_then(|i| latest_defined(self.series(kind), i));

        let macd_hist_prev = index.and_then(|i| {
            let hist = &self.macd_hist[..=i];
            let at = hist.iter().rposition(Option::is_some)?;
            at.checked_sub(1).and_then(|prev| hist[prev])
        });

        IndicatorSnapshot {
            symbol: self.symbol.clone(),
            params: self.params,
            requested: date,
            trading_date: index.map(|i| self.dates[i]),
            observations: index.map_or(0, |i| i + 1),
            close: index.map(|i| self.closes[i]),
            sma50: lookup(IndicatorKind::SmaShort),
            sma200: lookup(IndicatorKind::SmaLong),
            rsi14: lookup(IndicatorKind::Rsi),
            macd_line: lookup(IndicatorKind::MacdLine),
            macd_signal: lookup(IndicatorKind::MacdSignal),
            macd_hist: lookup(IndicatorKind::MacdHistogram),
            macd_hist_prev,
            bb_upper: lookup(IndicatorKind::BollingerUpper),
            bb_mid: lookup(IndicatorKind::BollingerMiddle),
            bb_lower: lookup(IndicatorKind::BollingerLower),
        }
    }

    /// Snapshot on the final trading day
    pub fn latest_snapshot(&self) -> Option<IndicatorSnapshot> {
        self.dates.last().map(|date| self.snapshot_at(*date))
    }
}

/// Free-function form of [`IndicatorSet::snapshot_at`]
pub fn snapshot_at(indicators: &IndicatorSet, date: NaiveDate) -> IndicatorSnapshot {
    indicators.snapshot_at(date)
}

fn latest_defined(series: &[Option<f64>], upto: usize) -> Option<f64> {
    series[..=upto].iter().rev().find_map(|v| *v)
}

/// Indicator values at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub symbol: String,
    pub params: IndicatorParams,
    /// Date the caller asked for
    pub requested: NaiveDate,
    /// Trading day the values were taken from; `None` before the series starts
    pub trading_date: Option<NaiveDate>,
    /// Observations available up to `trading_date`
    pub observations: usize,
    pub close: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd_line: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    /// Histogram one trading day earlier, for the histogram trend
    pub macd_hist_prev: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_mid: Option<f64>,
    pub bb_lower: Option<f64>,
}

impl IndicatorSnapshot {
    pub fn get(&self, kind: IndicatorKind) -> Option<f64> {
        match kind {
            IndicatorKind::SmaShort => self.sma50,
            IndicatorKind::SmaLong => self.sma200,
            IndicatorKind::Rsi => self.rsi14,
            IndicatorKind::MacdLine => self.macd_line,
            IndicatorKind::MacdSignal => self.macd_signal,
            IndicatorKind::MacdHistogram => self.macd_hist,
            IndicatorKind::BollingerUpper => self.bb_upper,
            IndicatorKind::BollingerMiddle => self.bb_mid,
            IndicatorKind::BollingerLower => self.bb_lower,
        }
    }

    /// Like [`get`](Self::get) but reports the shortfall as an error
    pub fn require(&self, kind: IndicatorKind) -> Result<f64> {
        self.get(kind).ok_or(EngineError::InsufficientHistory {
            indicator: kind,
            required: kind.lookback(&self.params),
            available: self.observations,
        })
    }

    /// True when the requested date precedes the whole series
    pub fn is_unavailable(&self) -> bool {
        self.trading_date.is_none()
    }

    pub fn label(&self, kind: IndicatorKind) -> String {
        kind.label(&self.params)
    }
}
