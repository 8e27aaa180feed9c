//! # Unit Components
//!
//! Tests mirror the library layout: instruction model, hazard engine,
//! statistics, reports, configuration, and session handling.


/// Hazard engine and misprediction oracles.
pub mod core;

/// Opcode classification, operand selection, and tokenizing.
pub mod isa;
