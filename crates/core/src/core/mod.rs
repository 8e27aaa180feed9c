//! Hazard engine.
//!
//! This module contains the stall accounting pass and its misprediction source:
//! 1. **Hazards:** Branch, misprediction, and RAW stall rules for one run.
//! 2. **Prediction:** The injectable oracle deciding which branches miss.

/// Stall accounting pass.
pub mod hazards;

/// Misprediction oracles.
pub mod predict;

pub use hazards::analyze;
pub use predict::{FixedOracle, MispredictOracle, RandomOracle};
