//! Pipeline hazard analysis library.
//!
//! This crate computes the stall cycles a 5-stage MIPS-like pipeline incurs per
//! instruction under three policies: no forwarding and no branch prediction,
//! forwarding without prediction, and forwarding with prediction. It provides:
//! 1. **ISA:** Opcode classification, read operand selection, and the text tokenizer.
//! 2. **Core:** The hazard engine and its injectable misprediction oracle.
//! 3. **Statistics:** Per-run stall counters by hazard kind.
//! 4. **Reports:** Instruction tables and cycle summaries.
//! 5. **Session:** Program loading, configuration, and multi-run sequencing.

/// Shared constants and error types.
pub mod common;
/// Session configuration (runs, seed, output).
pub mod config;
/// Hazard engine and misprediction oracles.
pub mod core;
/// Instruction model and tokenizer.
pub mod isa;
/// Report formatting and file output.
pub mod report;
/// Program loading and run sequencing.
pub mod sim;
/// Hazard statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or [`Config::load`].
pub use crate::config::{Config, RunConfig};
/// Runs the stall accounting pass over one program.
pub use crate::core::analyze;
/// Decoded instruction and program sequence.
pub use crate::isa::{Instruction, Program};
/// Session type driving all configured runs.
pub use crate::sim::{Analyzer, RunOutcome};
/// Per-run stall aggregates.
pub use crate::stats::{HazardCounters, HazardKind};
