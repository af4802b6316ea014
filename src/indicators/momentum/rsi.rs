//! RSI (Relative Strength Index) indicator

use crate::common::math;

/// RSI reported when there was neither a gain nor a loss across the window
pub const FLAT_RSI: f64 = 50.0;

/// Calculate RSI with Wilder smoothing
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
/// The first average is a simple mean of the first `window` deltas, so the
/// first value lands at index `window`. Later averages use
/// `(prev * (window - 1) + current) / window`.
///
/// Average loss of zero gives 100; a window with no movement at all gives
/// [`FLAT_RSI`].
pub fn compute_rsi(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if window == 0 || closes.len() < window + 1 {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let mut avg_gain = gains[..window].iter().sum::<f64>() / window as f64;
    let mut avg_loss = losses[..window].iter().sum::<f64>() / window as f64;
    out[window] = Some(rsi_from_averages(avg_gain, avg_loss));

    // delta d lands on close index d + 1
    for d in window..gains.len() {
        avg_gain = math::wilder_from_previous(gains[d], avg_gain, window);
        avg_loss = math::wilder_from_previous(losses[d], avg_loss, window);
        out[d + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }
    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return FLAT_RSI;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
