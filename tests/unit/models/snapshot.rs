//! Unit tests for indicator sets and point-in-time snapshots

use crate::support::{day, linear_closes, points_from_closes, ranging_closes, series_from_closes};
use stocklens::config::IndicatorParams;
use stocklens::error::EngineError;
use stocklens::indicators::registry::IndicatorKind;
use stocklens::models::indicators::{snapshot_at, IndicatorSet};
use stocklens::models::price::PriceSeries;

fn indicator_set(closes: &[f64]) -> IndicatorSet {
    IndicatorSet::compute(&series_from_closes(closes), &IndicatorParams::default()).unwrap()
}

#[test]
fn test_series_lengths_match_prices() {
    let set = indicator_set(&ranging_closes(120, 90.0, 110.0));
    for kind in IndicatorKind::ALL {
        assert_eq!(set.series(kind).len(), 120, "{:?}", kind);
    }
}

#[test]
fn test_first_defined_dates_follow_lookback() {
    let set = indicator_set(&ranging_closes(250, 90.0, 110.0));
    let params = IndicatorParams::default();
    for kind in IndicatorKind::ALL {
        let expected = day(kind.lookback(&params) - 1);
        assert_eq!(set.first_defined(kind), Some(expected), "{:?}", kind);
    }
}

#[test]
fn test_short_series_has_no_long_sma() {
    let set = indicator_set(&ranging_closes(120, 90.0, 110.0));
    assert!(set.first_defined(IndicatorKind::SmaLong).is_none());
    let latest = set.latest_snapshot().unwrap();
    assert!(latest.sma200.is_none());
    assert!(latest.sma50.is_some());

    match latest.require(IndicatorKind::SmaLong) {
        Err(EngineError::InsufficientHistory {
            indicator,
            required,
            available,
        }) => {
            assert_eq!(indicator, IndicatorKind::SmaLong);
            assert_eq!(required, 200);
            assert_eq!(available, 120);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_snapshot_exact_trading_day() {
    let closes = linear_closes(250, 100.0, 1.0);
    let set = indicator_set(&closes);
    let snapshot = set.snapshot_at(day(210));

    assert_eq!(snapshot.trading_date, Some(day(210)));
    assert_eq!(snapshot.observations, 211);
    assert_eq!(snapshot.close, Some(closes[210]));
    assert_eq!(snapshot.sma50, set.sma50[210]);
    assert_eq!(snapshot.sma200, set.sma200[210]);
    assert_eq!(snapshot.rsi14, set.rsi14[210]);
    assert_eq!(snapshot.macd_hist, set.macd_hist[210]);
    assert_eq!(snapshot.macd_hist_prev, set.macd_hist[209]);
    assert_eq!(snapshot.bb_lower, set.bb_lower[210]);
}

#[test]
fn test_snapshot_non_trading_day_uses_prior_day() {
    let closes = ranging_closes(60, 90.0, 110.0);
    let mut points = points_from_closes(&closes);
    // leave a three-day gap after the last point
    let last = points.pop().unwrap();
    let mut moved = last;
    moved.date = day(62);
    points.push(moved);
    let series = PriceSeries::new("GAP", points).unwrap();
    let set = IndicatorSet::compute(&series, &IndicatorParams::default()).unwrap();

    let snapshot = set.snapshot_at(day(60));
    assert_eq!(snapshot.requested, day(60));
    assert_eq!(snapshot.trading_date, Some(day(58)));
    assert_eq!(snapshot.close, Some(closes[58]));
    assert_eq!(snapshot.rsi14, set.rsi14[58]);
}

#[test]
fn test_snapshot_before_series_start_is_unavailable() {
    let set = indicator_set(&ranging_closes(60, 90.0, 110.0));
    let snapshot = snapshot_at(&set, day(0).pred_opt().unwrap());

    assert!(snapshot.is_unavailable());
    assert_eq!(snapshot.observations, 0);
    for kind in IndicatorKind::ALL {
        assert!(snapshot.get(kind).is_none());
    }
    assert!(snapshot.close.is_none());
}

#[test]
fn test_snapshot_before_lookback_is_unavailable_per_indicator() {
    let set = indicator_set(&ranging_closes(60, 90.0, 110.0));
    let snapshot = set.snapshot_at(day(16));

    assert_eq!(snapshot.trading_date, Some(day(16)));
    assert!(snapshot.rsi14.is_some());
    assert!(snapshot.bb_mid.is_none());
    assert!(snapshot.macd_line.is_none());
    assert!(snapshot.sma50.is_none());
}

#[test]
fn test_invalid_params_rejected() {
    let params = IndicatorParams {
        macd_fast: 30,
        ..IndicatorParams::default()
    };
    let series = series_from_closes(&linear_closes(10, 10.0, 1.0));
    assert!(matches!(
        IndicatorSet::compute(&series, &params),
        Err(EngineError::InvalidParameter(_))
    ));
}
