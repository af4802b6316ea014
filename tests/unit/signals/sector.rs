//! Unit tests for sector rotation

use crate::support::{assert_close, flat_closes, linear_closes, series_from_closes};
use stocklens::signals::sector::{analyze_sectors, RotationTrend, SectorSeries};

fn sector(name: &str, closes: &[f64]) -> SectorSeries {
    SectorSeries {
        sector: name.to_string(),
        series: series_from_closes(closes),
    }
}

#[test]
fn test_sector_returns() {
    let analysis = analyze_sectors(&[sector("IT", &linear_closes(30, 100.0, 1.0))]);
    let it = &analysis.performance[0];
    assert_eq!(it.latest_close, 129.0);
    // 129 against 125 and 110
    assert_close(it.return_1w_pct.unwrap(), 4.0 / 125.0 * 100.0);
    assert_close(it.return_1m_pct.unwrap(), 19.0 / 110.0 * 100.0);
}

#[test]
fn test_top_and_bottom_performers() {
    let analysis = analyze_sectors(&[
        sector("BANKING", &linear_closes(30, 100.0, -0.5)),
        sector("IT", &linear_closes(30, 100.0, 2.0)),
        sector("PHARMA", &linear_closes(30, 100.0, 0.5)),
    ]);
    let rotation = analysis.rotation.unwrap();
    assert_eq!(rotation.top_performer_week.as_deref(), Some("IT"));
    assert_eq!(rotation.bottom_performer_week.as_deref(), Some("BANKING"));
    assert_eq!(rotation.top_performer_month.as_deref(), Some("IT"));
    assert_eq!(rotation.bottom_performer_month.as_deref(), Some("BANKING"));
    // 2 of 3 positive
    assert_eq!(rotation.trend, RotationTrend::BullishRotation);
}

#[test]
fn test_rotation_trend_shares() {
    let bearish = analyze_sectors(&[
        sector("A", &linear_closes(30, 100.0, -1.0)),
        sector("B", &linear_closes(30, 100.0, -1.0)),
        sector("C", &linear_closes(30, 100.0, 1.0)),
    ]);
    assert_eq!(bearish.rotation.unwrap().trend, RotationTrend::BearishRotation);

    let mixed = analyze_sectors(&[
        sector("A", &linear_closes(30, 100.0, 1.0)),
        sector("B", &flat_closes(30, 100.0)),
    ]);
    let trend = mixed.rotation.unwrap().trend;
    assert_eq!(trend, RotationTrend::MixedRotation);
    assert_eq!(trend.to_string(), "Mixed Rotation - Sectors divided in performance");
}

#[test]
fn test_short_sectors_are_left_out() {
    let analysis = analyze_sectors(&[
        sector("NEW", &[100.0, 101.0, 102.0]),
        sector("OLD", &linear_closes(10, 100.0, -1.0)),
    ]);
    assert_eq!(analysis.performance.len(), 2);
    assert!(analysis.performance[0].return_1w_pct.is_none());

    let rotation = analysis.rotation.unwrap();
    assert_eq!(rotation.top_performer_week.as_deref(), Some("OLD"));
    assert!(rotation.top_performer_month.is_none());
    assert_eq!(rotation.trend, RotationTrend::BearishRotation);

    let none = analyze_sectors(&[sector("NEW", &[100.0, 101.0])]);
    assert!(none.rotation.is_none());
    assert!(analyze_sectors(&[]).rotation.is_none());
}
