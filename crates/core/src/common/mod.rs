//! Common constants and error types shared by every part of the analyser.
//!
//! 1. **Constants:** Fixed stall penalties, lookback depth, and prediction rate.
//! 2. **Error Handling:** Load, configuration, and report failures at the I/O boundary.

/// Fixed pipeline model constants.
pub mod constants;

/// Error types for the I/O boundary.
pub mod error;

pub use constants::{BRANCH_PROBABILITY, MAX_LEVEL, MAX_STALL};
pub use error::{ConfigError, Error, LoadError, ReportError, Result};
