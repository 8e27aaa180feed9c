//! Hazard statistics collection.
//!
//! This module tracks the per-run stall aggregates. It provides:
//! 1. **Hazard kinds:** RAW data hazards, branch stalls, and branch mispredictions.
//! 2. **Counters:** Cycles lost and instructions affected, per hazard kind.

use std::fmt;

/// Source of a stall charged to an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardKind {
    /// Read-after-write data dependency.
    Raw,
    /// Unconditional stall after a branch when prediction is disabled.
    Branch,
    /// Stall after a mispredicted branch when prediction is enabled.
    Misprediction,
}

impl HazardKind {
    /// All kinds in report order.
    pub const ALL: [Self; 3] = [Self::Raw, Self::Branch, Self::Misprediction];

    /// Human-readable label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::Branch => "Branch",
            Self::Misprediction => "Branch Mispredictions",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Six-slot stall aggregate for one analysis run.
///
/// Cycles lost and instructions affected, each split by [`HazardKind`].
/// A fresh value is created for every run and never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HazardCounters {
    /// Cycles lost to RAW hazards.
    pub raw_cycles: u64,
    /// Cycles lost to branch stalls.
    pub branch_cycles: u64,
    /// Cycles lost to branch mispredictions.
    pub mispredict_cycles: u64,
    /// Instructions stalled by a RAW hazard.
    pub raw_count: u64,
    /// Instructions stalled behind a branch.
    pub branch_count: u64,
    /// Instructions stalled behind a mispredicted branch.
    pub mispredict_count: u64,
}

impl HazardCounters {
    /// Records one stalled instruction.
    pub fn record(&mut self, kind: HazardKind, cycles: u32) {
        let cycles = u64::from(cycles);
        match kind {
            HazardKind::Raw => {
                self.raw_cycles += cycles;
                self.raw_count += 1;
            }
            HazardKind::Branch => {
                self.branch_cycles += cycles;
                self.branch_count += 1;
            }
            HazardKind::Misprediction => {
                self.mispredict_cycles += cycles;
                self.mispredict_count += 1;
            }
        }
    }

    /// Cycles lost to one hazard kind.
    pub const fn cycles(&self, kind: HazardKind) -> u64 {
        match kind {
            HazardKind::Raw => self.raw_cycles,
            HazardKind::Branch => self.branch_cycles,
            HazardKind::Misprediction => self.mispredict_cycles,
        }
    }

    /// Instructions affected by one hazard kind.
    pub const fn affected(&self, kind: HazardKind) -> u64 {
        match kind {
            HazardKind::Raw => self.raw_count,
            HazardKind::Branch => self.branch_count,
            HazardKind::Misprediction => self.mispredict_count,
        }
    }

    /// Cycles lost to all hazards.
    pub const fn total_cycles(&self) -> u64 {
        self.raw_cycles + self.branch_cycles + self.mispredict_cycles
    }

    /// Instructions affected by any hazard.
    pub const fn total_affected(&self) -> u64 {
        self.raw_count + self.branch_count + self.mispredict_count
    }

    /// Slots in the classic `RAW, BRCH, MISBRCH, RCNT, BCNT, BMCNT` layout.
    pub const fn as_array(&self) -> [u64; 6] {
        [
            self.raw_cycles,
            self.branch_cycles,
            self.mispredict_cycles,
            self.raw_count,
            self.branch_count,
            self.mispredict_count,
        ]
    }
}
