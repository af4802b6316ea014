//! Indicator computations over closing prices
//!
//! Every function returns a series aligned to its input: one slot per
//! observation, `None` until the lookback window is filled.

pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use registry::*;
