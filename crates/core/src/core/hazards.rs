//! Hazard detection and stall accounting.
//!
//! This module implements the single pass that charges stall cycles to a
//! program for one [`RunConfig`]. For each instruction after the first it
//! applies, in order:
//! 1. **Control stall:** A fixed stall behind any branch (prediction off), or
//!    behind a mispredicted branch (prediction on).
//! 2. **Data stall:** Read-after-write hazards against one or two
//!    predecessors, or only load-use hazards when results are forwarded.
//!
//! An instruction is charged at most once per run; the first applicable
//! hazard wins and later ones are checked but ignored.

use tracing::{debug, trace};

use super::predict::MispredictOracle;
use crate::common::constants::{MAX_LEVEL, MAX_STALL};
use crate::config::RunConfig;
use crate::isa::{Category, Form, Instruction, Program};
use crate::stats::{HazardCounters, HazardKind};

/// Stall forced by a producer `level` instructions back without forwarding.
///
/// The immediate predecessor costs [`MAX_STALL`] cycles; each further level
/// costs one cycle less.
pub const fn raw_penalty(level: usize) -> u32 {
    MAX_STALL + 1 - level as u32
}

/// Stall forced by a load immediately followed by a consumer, with forwarding.
pub const fn load_use_penalty() -> u32 {
    MAX_STALL - 1
}

/// Analyses `program` in place under `config` and returns the run counters.
///
/// Stall fields must be clean on entry (a freshly parsed or cloned program).
/// Programs with fewer than two instructions produce no stalls.
///
/// # Arguments
///
/// * `program` - The run's own instruction sequence; mutated in place.
/// * `config` - Forwarding and branch prediction flags for this run.
/// * `oracle` - Misprediction source; consulted once per branch after the
///   first instruction, and only when prediction is enabled.
///
/// # Examples
///
/// ```
/// use stallscope_core::config::RunConfig;
/// use stallscope_core::core::{analyze, FixedOracle};
/// use stallscope_core::isa::parse_program;
///
/// let mut program = parse_program("ADD R1 R2 R3\nADD R4 R1 R5\n");
/// let counters = analyze(&mut program, &RunConfig::baseline(), &mut FixedOracle(false));
///
/// assert_eq!(program[1].stall_cycles(), 2);
/// assert_eq!(counters.raw_cycles, 2);
/// assert_eq!(counters.raw_count, 1);
/// ```
pub fn analyze<O>(program: &mut Program, config: &RunConfig, oracle: &mut O) -> HazardCounters
where
    O: MispredictOracle + ?Sized,
{
    let mut counters = HazardCounters::default();
    let insts = program.as_mut_slice();

    for i in 1..insts.len() {
        if config.branch_prediction {
            misprediction_stall(insts, i, oracle, &mut counters);
        } else {
            branch_stall(insts, i, &mut counters);
        }

        if config.forwarding {
            load_use_stall(insts, i, &mut counters);
        } else {
            raw_stall(insts, i, &mut counters);
        }
    }

    counters
}

fn charge(
    insts: &mut [Instruction],
    i: usize,
    kind: HazardKind,
    cycles: u32,
    counters: &mut HazardCounters,
) {
    let inst = &mut insts[i];
    if inst.assign_stall(kind, cycles) {
        counters.record(kind, cycles);
        debug!(index = i, opcode = inst.opcode(), hazard = %kind, cycles, "stall");
    }
}

/// Prediction disabled: every branch stalls its successor.
fn branch_stall(insts: &mut [Instruction], i: usize, counters: &mut HazardCounters) {
    if insts[i - 1].category() == Category::Branch {
        charge(insts, i, HazardKind::Branch, MAX_STALL, counters);
    }
}

/// Prediction enabled: draw for this branch, then stall if the predecessor missed.
fn misprediction_stall<O>(
    insts: &mut [Instruction],
    i: usize,
    oracle: &mut O,
    counters: &mut HazardCounters,
) where
    O: MispredictOracle + ?Sized,
{
    if insts[i].category() == Category::Branch && oracle.mispredicts() {
        trace!(index = i, opcode = insts[i].opcode(), "branch mispredicted");
        insts[i].mark_mispredicted();
    }

    if insts[i - 1].is_mispredicted() {
        charge(insts, i, HazardKind::Misprediction, MAX_STALL, counters);
    }
}

/// No forwarding: producers up to [`MAX_LEVEL`] back can stall the consumer.
///
/// A farther producer is shielded when the nearer instruction already
/// stalled. Every level is examined even after a hit; the first-charge rule
/// keeps later hits from taking effect.
fn raw_stall(insts: &mut [Instruction], i: usize, counters: &mut HazardCounters) {
    for level in 1..=MAX_LEVEL.min(i) {
        let hit = insts[i - level]
            .written_register()
            .is_some_and(|reg| insts[i].reads(reg));
        if !hit {
            continue;
        }

        let shielded = level > 1 && insts[i - level + 1].stall_cycles() != 0;
        if shielded {
            continue;
        }

        charge(insts, i, HazardKind::Raw, raw_penalty(level), counters);
    }
}

/// Forwarding: only a load feeding the next instruction stalls it.
fn load_use_stall(insts: &mut [Instruction], i: usize, counters: &mut HazardCounters) {
    let producer = &insts[i - 1];
    let hit = producer.form() == Form::Load
        && producer
            .written_register()
            .is_some_and(|reg| insts[i].reads(reg));

    if hit {
        charge(insts, i, HazardKind::Raw, load_use_penalty(), counters);
    }
}
