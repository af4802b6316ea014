//! Numeric primitives shared by the indicator modules

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the trailing `period` values ending at `end` (inclusive)
pub fn window_mean(values: &[f64], end: usize, period: usize) -> Option<f64> {
    if period == 0 || end >= values.len() || end + 1 < period {
        return None;
    }
    mean(&values[end + 1 - period..=end])
}

/// Sample standard deviation (n - 1 denominator)
///
/// Matches the rolling standard deviation most charting packages report for
/// Bollinger Bands. Needs at least two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// EMA smoothing factor: 2 / (N + 1)
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step from the previous average
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = ema_alpha(period);
    alpha * value + (1.0 - alpha) * previous
}

/// Wilder smoothing step: (prev * (N - 1) + value) / N
pub fn wilder_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    (previous * (period as f64 - 1.0) + value) / period as f64
}
