//! Unit tests for report formatting

use crate::support::{day, linear_closes, series_from_closes};
use stocklens::config::IndicatorParams;
use stocklens::report::{
    format_integer, format_number, format_percent, format_percentage, NOT_AVAILABLE,
};
use stocklens::SignalEngine;

#[test]
fn test_format_number() {
    assert_eq!(format_number(Some(1234.5678), 2), "1,234.57");
    assert_eq!(format_number(Some(-1234567.891), 2), "-1,234,567.89");
    assert_eq!(format_number(Some(999.0), 0), "999");
    assert_eq!(format_number(Some(0.5), 3), "0.500");
    assert_eq!(format_number(None, 2), NOT_AVAILABLE);
    assert_eq!(format_number(Some(f64::NAN), 2), "N/A");
}

#[test]
fn test_format_integer() {
    assert_eq!(format_integer(Some(1234567.6)), "1,234,568");
    assert_eq!(format_integer(Some(100.0)), "100");
    assert_eq!(format_integer(None), "N/A");
}

#[test]
fn test_format_percentage() {
    assert_eq!(format_percentage(Some(0.0123), 2), "1.23%");
    assert_eq!(format_percentage(Some(-0.5), 1), "-50.0%");
    assert_eq!(format_percentage(Some(f64::INFINITY), 2), "N/A");
}

#[test]
fn test_format_percent_fields() {
    let series = series_from_closes(&linear_closes(30, 100.0, 1.0));
    let summary = series.summary();
    // 129 against 125
    assert_eq!(format_percent(summary.return_1w_pct, 2), "3.20%");
    assert_eq!(format_percent(Some(2.4), 1), "2.4%");
    assert_eq!(format_percent(None, 2), "N/A");
    assert_eq!(
        format_percent(Some(1.23), 2),
        format_percentage(Some(0.0123), 2)
    );
}

#[test]
fn test_report_json_omits_absent_sections() {
    let series = series_from_closes(&linear_closes(60, 10.0, 0.1));
    let report =
        SignalEngine::analyze(&series, None, &IndicatorParams::default(), None).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json.get("historical").is_none());
    assert!(json.get("fundamentals").is_none());
    assert_eq!(json["latest"]["sma200"], serde_json::Value::Null);
    assert_eq!(json["latest"]["trading_date"], day(59).to_string());
}
