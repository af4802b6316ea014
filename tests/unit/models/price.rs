//! Unit tests for price series validation and summary

use crate::support::{assert_close, day, linear_closes, points_from_closes, series_from_closes};
use stocklens::error::{EngineError, SeriesViolation};
use stocklens::models::price::{period_return, PricePoint, PriceSeries};

#[test]
fn test_series_rejects_empty() {
    let err = PriceSeries::new("EMPTY", Vec::new()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidSeries(SeriesViolation::Empty)));
    assert!(err.is_invalid_series());
}

#[test]
fn test_series_rejects_duplicate_date() {
    let mut points = points_from_closes(&[10.0, 11.0, 12.0]);
    points[2].date = points[1].date;
    let err = PriceSeries::new("DUP", points).unwrap_err();
    match err {
        EngineError::InvalidSeries(SeriesViolation::NonIncreasingDate { index, .. }) => {
            assert_eq!(index, 2)
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_series_rejects_descending_dates() {
    let mut points = points_from_closes(&[10.0, 11.0]);
    points.reverse();
    assert!(PriceSeries::new("DESC", points).unwrap_err().is_invalid_series());
}

#[test]
fn test_series_rejects_non_positive_price() {
    let mut points = points_from_closes(&[10.0, 11.0, 12.0]);
    points[1].close = 0.0;
    let err = PriceSeries::new("ZERO", points).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidSeries(SeriesViolation::InvalidPrice { field: "close", .. })
    ));

    let mut points = points_from_closes(&[10.0, 11.0]);
    points[0].low = -1.0;
    assert!(PriceSeries::new("NEG", points).is_err());

    let mut points = points_from_closes(&[10.0, 11.0]);
    points[0].open = f64::NAN;
    assert!(PriceSeries::new("NAN", points).is_err());
}

#[test]
fn test_series_rejects_negative_volume() {
    let point = PricePoint::new(day(0), 10.0, 10.5, 9.5, 10.0, -5.0);
    let err = PriceSeries::new("VOL", vec![point]).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidSeries(SeriesViolation::InvalidVolume { .. })
    ));
}

#[test]
fn test_series_accepts_zero_volume_and_gaps() {
    let points = vec![
        PricePoint::new(day(0), 10.0, 10.5, 9.5, 10.0, 0.0),
        PricePoint::new(day(3), 10.0, 10.5, 9.5, 10.2, 100.0),
    ];
    let series = PriceSeries::new("GAP", points).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.symbol(), "GAP");
    assert_eq!(series.first_date(), Some(day(0)));
}

#[test]
fn test_index_at_or_before() {
    let points = vec![
        PricePoint::new(day(0), 10.0, 10.5, 9.5, 10.0, 0.0),
        PricePoint::new(day(3), 10.0, 10.5, 9.5, 10.2, 100.0),
        PricePoint::new(day(4), 10.0, 10.5, 9.5, 10.4, 100.0),
    ];
    let series = PriceSeries::new("IDX", points).unwrap();
    assert_eq!(series.index_at_or_before(day(0)), Some(0));
    assert_eq!(series.index_at_or_before(day(2)), Some(0));
    assert_eq!(series.index_at_or_before(day(3)), Some(1));
    assert_eq!(series.index_at_or_before(day(30)), Some(2));
    assert_eq!(series.index_at_or_before(day(0).pred_opt().unwrap()), None);
}

#[test]
fn test_summary() {
    let series = series_from_closes(&linear_closes(300, 100.0, 1.0));
    let summary = series.summary();

    assert_eq!(summary.date, day(299));
    assert_eq!(summary.last_close, 399.0);
    assert_close(summary.change.unwrap(), 1.0);
    assert_close(summary.change_pct.unwrap(), 1.0 / 398.0 * 100.0);
    // 52-week window is the last 252 closes
    assert_eq!(summary.high_52w, 399.0);
    assert_eq!(summary.low_52w, 148.0);
    assert_close(summary.return_1w_pct.unwrap(), 4.0 / 395.0 * 100.0);
    assert_close(summary.return_1m_pct.unwrap(), 19.0 / 380.0 * 100.0);
}

#[test]
fn test_summary_short_history() {
    let series = series_from_closes(&[50.0]);
    let summary = series.summary();
    assert!(summary.change.is_none());
    assert!(summary.change_pct.is_none());
    assert!(summary.return_1w_pct.is_none());
    assert_eq!(summary.high_52w, 50.0);
    assert_eq!(summary.low_52w, 50.0);
}

#[test]
fn test_period_return() {
    assert!(period_return(&[], 1).is_none());
    assert!(period_return(&[1.0, 2.0], 0).is_none());
    assert!(period_return(&[1.0, 2.0], 3).is_none());
    assert_close(period_return(&[100.0, 90.0, 110.0], 3).unwrap(), 10.0);
    assert_close(period_return(&[100.0, 90.0, 110.0], 1).unwrap(), 0.0);
}

#[test]
fn test_weekly_return_spans_five_observations() {
    let closes = [100.0, 200.0, 210.0, 220.0, 230.0, 250.0];
    // 250 against 200, four sessions back
    assert_close(period_return(&closes, 5).unwrap(), 25.0);
    assert!(period_return(&closes[1..], 6).is_none());
}
