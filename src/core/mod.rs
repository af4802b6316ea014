//! Core application primitives (batch orchestration)

pub mod runtime;

pub use runtime::*;
