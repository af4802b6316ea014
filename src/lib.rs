//! Technical indicator and signal engine for daily stock reports.
//!
//! Given a validated [`PriceSeries`](models::PriceSeries) the engine derives
//! SMA, RSI, MACD and Bollinger series, point-in-time snapshots, and a
//! rule-based Buy/Sell/Hold recommendation. Fetching data and rendering the
//! report are left to callers.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;

pub use error::{EngineError, Result, SeriesViolation};
pub use signals::engine::{derive_signal, SignalEngine};
