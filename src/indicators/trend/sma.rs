//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate SMA over closes
///
/// Value at `i` is the unweighted mean of `closes[i + 1 - window..=i]`,
/// `None` while fewer than `window` closes are available.
pub fn compute_sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    (0..closes.len())
        .map(|i| math::window_mean(closes, i, window))
        .collect()
}
