//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerSeries;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(window)
/// Upper Band = Middle + (num_std * σ)
/// Lower Band = Middle - (num_std * σ)
///
/// σ is the sample standard deviation (n - 1) of the same trailing window.
pub fn compute_bollinger(closes: &[f64], window: usize, num_std: f64) -> BollingerSeries {
    let len = closes.len();
    let mut bands = BollingerSeries {
        upper: vec![None; len],
        middle: vec![None; len],
        lower: vec![None; len],
    };
    if window < 2 || len < window {
        return bands;
    }

    for i in window - 1..len {
        let slice = &closes[i + 1 - window..=i];
        let (Some(middle), Some(sigma)) = (math::mean(slice), math::sample_std_dev(slice)) else {
            continue;
        };
        bands.middle[i] = Some(middle);
        bands.upper[i] = Some(middle + num_std * sigma);
        bands.lower[i] = Some(middle - num_std * sigma);
    }
    bands
}
