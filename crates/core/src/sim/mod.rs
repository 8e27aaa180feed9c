//! Session utilities and program loading.
//!
//! Provides loading of program text from disk and the session that runs
//! each configured policy over its own copy of the program.

/// Analysis session and per-run outcomes.
pub mod analyzer;

/// Program file loader.
pub mod loader;

pub use analyzer::{Analyzer, RunOutcome, run_once};
pub use loader::load_program;
