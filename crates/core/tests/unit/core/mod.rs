//! # Core Unit Tests
//!
//! Tests for the hazard engine and the misprediction oracles.
