//! Pipeline Model Constants.
//!
//! This module defines the fixed parameters of the modelled 5-stage pipeline. It includes:
//! 1. **Stall Constants:** The largest bubble a single hazard can insert and how far back producers are searched.
//! 2. **Prediction Constants:** The branch prediction hit rate, expressed in tenths.
//! 3. **Layout Constants:** Operand slot count and pipeline fill latency.

/// Maximum number of stall cycles a single producer can force on a consumer.
pub const MAX_STALL: u32 = 2;

/// Maximum lookback distance searched for RAW producers without forwarding.
pub const MAX_LEVEL: usize = 2;

/// Branch prediction hit rate in tenths (9 means 9 out of 10 predictions are correct).
pub const BRANCH_PROBABILITY: u32 = 9;

/// Denominator of [`BRANCH_PROBABILITY`]; draws are uniform in `1..=BRANCH_DRAW_RANGE`.
pub const BRANCH_DRAW_RANGE: u32 = 10;

/// Number of operand slots following the opcode.
pub const OPERAND_SLOTS: usize = 3;

/// Cycles needed to fill the pipeline before the first instruction retires.
pub const PIPELINE_FILL_CYCLES: u64 = 4;

/// Input file read when no path is supplied.
pub const DEFAULT_INPUT: &str = "input.txt";
