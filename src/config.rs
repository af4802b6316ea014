//! Runtime configuration: environment name and indicator windows

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Deployment environment, read from `APP_ENV` (or `ENVIRONMENT`)
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .map(|v| v.trim().to_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Window lengths for every computed indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub sma_short: usize,
    pub sma_long: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bb_period: usize,
    pub bb_std_dev: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_short: 50,
            sma_long: 200,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_std_dev: 2.0,
        }
    }
}

impl IndicatorParams {
    /// Defaults overridden by `STOCKLENS_*` environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let params = Self {
            sma_short: env_usize("STOCKLENS_SMA_SHORT", defaults.sma_short)?,
            sma_long: env_usize("STOCKLENS_SMA_LONG", defaults.sma_long)?,
            rsi_period: env_usize("STOCKLENS_RSI_PERIOD", defaults.rsi_period)?,
            macd_fast: env_usize("STOCKLENS_MACD_FAST", defaults.macd_fast)?,
            macd_slow: env_usize("STOCKLENS_MACD_SLOW", defaults.macd_slow)?,
            macd_signal: env_usize("STOCKLENS_MACD_SIGNAL", defaults.macd_signal)?,
            bb_period: env_usize("STOCKLENS_BB_PERIOD", defaults.bb_period)?,
            bb_std_dev: env_f64("STOCKLENS_BB_STD_DEV", defaults.bb_std_dev)?,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("sma_short", self.sma_short),
            ("sma_long", self.sma_long),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bb_period", self.bb_period),
        ];
        for (name, window) in windows {
            if window == 0 {
                return Err(EngineError::InvalidParameter(format!(
                    "{} must be a positive integer",
                    name
                )));
            }
        }
        if self.sma_short >= self.sma_long {
            return Err(EngineError::InvalidParameter(format!(
                "sma_short ({}) must be less than sma_long ({})",
                self.sma_short, self.sma_long
            )));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(EngineError::InvalidParameter(format!(
                "macd_fast ({}) must be less than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        if self.bb_period < 2 {
            return Err(EngineError::InvalidParameter(
                "bb_period must be at least 2".to_string(),
            ));
        }
        if !(self.bb_std_dev.is_finite() && self.bb_std_dev > 0.0) {
            return Err(EngineError::InvalidParameter(format!(
                "bb_std_dev must be a positive number, got {}",
                self.bb_std_dev
            )));
        }
        Ok(())
    }
}

fn env_usize(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<usize>().map_err(|_| {
            EngineError::InvalidParameter(format!("{} is not a valid window: {}", key, raw))
        }),
        Err(_) => Ok(default),
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<f64>().map_err(|_| {
            EngineError::InvalidParameter(format!("{} is not a valid number: {}", key, raw))
        }),
        Err(_) => Ok(default),
    }
}
