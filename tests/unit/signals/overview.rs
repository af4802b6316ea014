//! Unit tests for the market overview

use crate::support::blank_snapshot;
use stocklens::models::signal::Tilt;
use stocklens::signals::overview::{overall_trend, IndicatorReading, MarketOverview, OverallTrend};
use stocklens::signals::sector::{RotationTrend, SectorRotation};

fn reading(lean: Tilt) -> IndicatorReading {
    IndicatorReading {
        indicator: "X".to_string(),
        lean,
        status: String::new(),
    }
}

fn readings(leans: &[Tilt]) -> Vec<IndicatorReading> {
    leans.iter().map(|l| reading(*l)).collect()
}

#[test]
fn test_overall_trend_votes() {
    use Tilt::*;
    assert_eq!(
        overall_trend(&readings(&[Bullish, Bullish, Bullish, Neutral])),
        OverallTrend::BullishTrend
    );
    assert_eq!(
        overall_trend(&readings(&[Bearish, Bearish, Bearish, Bullish])),
        OverallTrend::BearishTrend
    );
    assert_eq!(
        overall_trend(&readings(&[Neutral, Neutral, Neutral, Bullish])),
        OverallTrend::SidewaysMovement
    );
    // 2 of 4 is not a majority above 60%
    assert_eq!(
        overall_trend(&readings(&[Bullish, Bullish, Bearish, Neutral])),
        OverallTrend::MixedSignals
    );
    assert_eq!(overall_trend(&[]), OverallTrend::MixedSignals);
}

#[test]
fn test_readings_from_snapshot() {
    let mut s = blank_snapshot();
    s.sma50 = Some(105.0);
    s.sma200 = Some(95.0);
    s.rsi14 = Some(82.0);
    s.macd_line = Some(1.2);
    s.macd_signal = Some(0.8);
    s.bb_upper = Some(98.0);
    s.bb_mid = Some(95.0);
    s.bb_lower = Some(92.0);

    let overview = MarketOverview::from_snapshot(&s);
    let statuses: Vec<_> = overview.readings.iter().map(|r| r.status.as_str()).collect();
    assert_eq!(
        statuses,
        vec![
            "Bullish (Golden Cross)",
            "Overbought",
            "Bullish (MACD above Signal)",
            "Overbought (Above Upper Band)",
        ]
    );
    assert_eq!(overview.readings[1].indicator, "RSI14");
    assert_eq!(overview.overall, OverallTrend::MixedSignals);
}

#[test]
fn test_missing_indicators_read_as_insufficient() {
    let overview = MarketOverview::from_snapshot(&blank_snapshot());
    assert!(overview
        .readings
        .iter()
        .all(|r| r.status == "Insufficient data" && r.lean == Tilt::Neutral));
    assert_eq!(overview.overall, OverallTrend::SidewaysMovement);
    assert_eq!(overview.overall.to_string(), "Sideways Movement");
}

#[test]
fn test_sector_trend_votes_in_overview() {
    let mut s = blank_snapshot();
    s.sma50 = Some(95.0);
    s.sma200 = Some(90.0);
    s.macd_line = Some(1.0);
    s.macd_signal = Some(0.5);
    let rotation = SectorRotation {
        top_performer_week: Some("IT".to_string()),
        bottom_performer_week: Some("BANKING".to_string()),
        top_performer_month: Some("IT".to_string()),
        bottom_performer_month: Some("BANKING".to_string()),
        trend: RotationTrend::BullishRotation,
    };

    // SMA and MACD alone are 2 of 4
    assert_eq!(MarketOverview::from_snapshot(&s).overall, OverallTrend::MixedSignals);

    let overview = MarketOverview::with_sector_trend(&s, Some(&rotation));
    assert_eq!(overview.readings.len(), 5);
    assert_eq!(overview.readings[4].indicator, "Sector Trend");
    assert_eq!(overview.readings[4].lean, Tilt::Bullish);
    // 3 of 5 is exactly 60%, not above it
    assert_eq!(overview.overall, OverallTrend::MixedSignals);

    s.rsi14 = Some(25.0);
    let overview = MarketOverview::with_sector_trend(&s, Some(&rotation));
    assert_eq!(overview.overall, OverallTrend::BullishTrend);
}
