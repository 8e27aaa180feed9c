//! Analysis session: runs every configured policy over its own copy of a program.
//!
//! Each run clones the parsed program so its hazard state starts clean, owns
//! its counters, and gets its own misprediction oracle seeded from the
//! session configuration. Runs never share mutable state.

use std::path::PathBuf;

use tracing::info;

use crate::common::error::ReportError;
use crate::config::{Config, RunConfig};
use crate::core::hazards::analyze;
use crate::core::predict::{MispredictOracle, RandomOracle};
use crate::isa::Program;
use crate::report::{self, RunReport, Summary};
use crate::stats::HazardCounters;

/// Result of one configuration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Report name of the run.
    pub name: String,
    /// Policy flags used.
    pub config: RunConfig,
    /// The run's annotated copy of the program.
    pub program: Program,
    /// Stall aggregates of the run.
    pub counters: HazardCounters,
}

impl RunOutcome {
    /// Full report (table and summary).
    pub fn report(&self) -> RunReport<'_> {
        RunReport::new(&self.name, &self.program, &self.counters)
    }

    /// Summary section.
    pub fn summary(&self) -> Summary {
        self.report().summary()
    }

    /// Total cycles including pipeline fill.
    pub fn total_cycles(&self) -> u64 {
        report::total_cycles(&self.program)
    }
}

/// Analyses a fresh copy of `source` under one configuration.
pub fn run_once<O>(source: &Program, config: &RunConfig, oracle: &mut O) -> RunOutcome
where
    O: MispredictOracle + ?Sized,
{
    let mut program = source.clone();
    program.reset();
    let counters = analyze(&mut program, config, oracle);

    let name = config.label();
    info!(
        run = %name,
        instructions = program.len(),
        cycles = report::total_cycles(&program),
        stalls = counters.total_cycles(),
        "run complete"
    );

    RunOutcome {
        name,
        config: config.clone(),
        program,
        counters,
    }
}

/// Top-level analysis session.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Creates a session from a configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Session configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every configured policy, each with its own oracle.
    ///
    /// With a configured seed every run draws the same sequence, so repeated
    /// sessions are identical.
    pub fn run(&self, program: &Program) -> Vec<RunOutcome> {
        self.config
            .runs
            .iter()
            .map(|run| {
                let mut oracle = RandomOracle::from_seed_option(self.config.seed);
                run_once(program, run, &mut oracle)
            })
            .collect()
    }

    /// Runs every configured policy, drawing from a caller supplied oracle.
    pub fn run_with<O>(&self, program: &Program, oracle: &mut O) -> Vec<RunOutcome>
    where
        O: MispredictOracle + ?Sized,
    {
        self.config
            .runs
            .iter()
            .map(|run| run_once(program, run, &mut *oracle))
            .collect()
    }

    /// Writes one report file per outcome into the configured directory.
    ///
    /// Does nothing when file output is disabled.
    ///
    /// # Errors
    ///
    /// Stops at the first report that cannot be written.
    pub fn write_reports(&self, outcomes: &[RunOutcome]) -> Result<Vec<PathBuf>, ReportError> {
        if !self.config.output.write_files {
            return Ok(Vec::new());
        }
        outcomes
            .iter()
            .map(|outcome| outcome.report().write_to(&self.config.output.dir))
            .collect()
    }
}
