//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::{compute_ema, compute_ema_partial};
use crate::models::indicators::MacdSeries;

/// Calculate MACD
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD, seeded on the first `signal` MACD values
/// Histogram = MACD - Signal
pub fn compute_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let fast = compute_ema(closes, fast_period);
    let slow = compute_ema(closes, slow_period);

    let line: Vec<Option<f64>> = fast
        .iter()
        .zip(slow.iter())
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    let signal = compute_ema_partial(&line, signal_period);

    let histogram = line
        .iter()
        .zip(signal.iter())
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        line,
        signal,
        histogram,
    }
}
