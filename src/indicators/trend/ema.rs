//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate EMA over a fully defined series
///
/// Seeded with the SMA of the first `period` values at index `period - 1`,
/// then smoothed with alpha = 2 / (period + 1).
pub fn compute_ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut prev = match math::mean(&values[..period]) {
        Some(seed) => seed,
        None => return out,
    };
    out[period - 1] = Some(prev);

    for i in period..values.len() {
        prev = math::ema_from_previous(values[i], prev, period);
        out[i] = Some(prev);
    }
    out
}

/// Calculate EMA over a series that becomes defined part-way through
///
/// The seed window starts at the first defined value. Gaps after that point
/// are not expected (indicator series are defined on a suffix); any gap
/// resets the output to `None` from there on.
pub fn compute_ema_partial(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    let start = match values.iter().position(Option::is_some) {
        Some(start) => start,
        None => return out,
    };

    let defined: Vec<f64> = values[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in compute_ema(&defined, period).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}

