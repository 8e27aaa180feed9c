//! Run reports.
//!
//! Turns one analysed program and its counters into:
//! 1. **Table:** One row per instruction with its category, stall, and misprediction flag.
//! 2. **Summary:** Total cycles, affected instructions, and stall breakdowns by
//!    instruction category and by hazard kind.
//!
//! Total cycles are `PIPELINE_FILL_CYCLES + N + Σ stalls`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::PIPELINE_FILL_CYCLES;
use crate::common::error::ReportError;
use crate::isa::{Category, Program};
use crate::stats::{HazardCounters, HazardKind};

const LABEL_WIDTH: usize = 41;
const RULE: &str = "--------";

/// Total cycles to run `program`: pipeline fill, one per instruction, plus stalls.
pub fn total_cycles(program: &Program) -> u64 {
    PIPELINE_FILL_CYCLES + program.len() as u64 + program.total_stalls()
}

/// Aggregated figures for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Heading, normally the report file name.
    pub title: String,
    /// Number of instructions analysed.
    pub instructions: u64,
    /// `PIPELINE_FILL_CYCLES + instructions + total_stalls`.
    pub total_cycles: u64,
    /// Sum of stall cycles over all instructions.
    pub total_stalls: u64,
    /// Branches marked mispredicted.
    pub mispredictions: u64,
    /// Stall cycles per [`Category`], indexed by [`Category::index`].
    pub stalls_by_category: [u64; 4],
    /// Hazard counters of the run.
    pub counters: HazardCounters,
}

impl Summary {
    /// Computes the summary of an analysed program.
    pub fn compute(title: impl Into<String>, program: &Program, counters: &HazardCounters) -> Self {
        let mut stalls_by_category = [0; 4];
        for inst in program {
            stalls_by_category[inst.category().index()] += u64::from(inst.stall_cycles());
        }

        Self {
            title: title.into(),
            instructions: program.len() as u64,
            total_cycles: total_cycles(program),
            total_stalls: program.total_stalls(),
            mispredictions: program.mispredictions(),
            stalls_by_category,
            counters: *counters,
        }
    }

    /// Stall cycles charged to instructions of one category.
    pub const fn category_stalls(&self, category: Category) -> u64 {
        self.stalls_by_category[category.index()]
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: u64) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}: {value}")
}

fn heading(f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}:")
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counters;
        writeln!(f, "SUMMARY: {}", self.title)?;
        writeln!(f, "{RULE}")?;
        row(f, "1) Total Cycles", self.total_cycles)?;
        row(f, "2) Total Instructions", self.instructions)?;
        row(f, "3) Total Branch Mispredictions", self.mispredictions)?;
        heading(f, "4) Instructions affected due to following")?;
        row(f, "   4.1) RAW Hazards", c.affected(HazardKind::Raw))?;
        row(f, "   4.2) Branches", c.affected(HazardKind::Branch))?;
        row(f, "   4.3) Branch Mispredictions", c.affected(HazardKind::Misprediction))?;
        row(f, "5) Total Stalls", self.total_stalls)?;
        heading(f, "   5.1) Stalls per Instruction Type")?;
        for (letter, category) in ['a', 'b', 'c', 'd'].into_iter().zip(Category::ALL) {
            let label = format!("        {letter}) {}", title_case(category.label()));
            row(f, &label, self.category_stalls(category))?;
        }
        heading(f, "   5.2) Stalls per Hazard")?;
        for (letter, kind) in ['a', 'b', 'c'].into_iter().zip(HazardKind::ALL) {
            let label = format!("        {letter}) {kind}");
            row(f, &label, c.cycles(kind))?;
        }
        Ok(())
    }
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_string() + &chars.as_str().to_ascii_lowercase()
    })
}

/// Full report for one run: instruction table followed by the summary.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    name: &'a str,
    program: &'a Program,
    counters: &'a HazardCounters,
}

impl<'a> RunReport<'a> {
    /// Creates a report for an analysed program.
    pub const fn new(name: &'a str, program: &'a Program, counters: &'a HazardCounters) -> Self {
        Self {
            name,
            program,
            counters,
        }
    }

    /// Report file name: `<name>_<N>.txt`.
    pub fn file_name(&self) -> String {
        format!("{}_{}.txt", self.name, self.program.len())
    }

    /// Summary section on its own.
    pub fn summary(&self) -> Summary {
        Summary::compute(self.file_name(), self.program, self.counters)
    }

    /// Writes the report into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// [`ReportError::Io`] when the directory or file cannot be written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
        let dir = dir.as_ref();
        let path = dir.join(self.file_name());
        fs::create_dir_all(dir)
            .and_then(|()| fs::write(&path, self.to_string()))
            .map_err(|source| ReportError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!(
            "{:<6}{:<10}{:<10}{:<10}{:<12}{:<6}{}",
            "Op", "Rd/Rs", "Rs/imm", "Rt/imm", "Op Type", "Stall", "Branch Miss"
        );
        let rule = format!(
            "{:<6}{:<10}{:<10}{:<10}{:<12}{:<6}{}",
            "--", "-----", "------", "------", "-------", "-----", "-----------"
        );
        writeln!(f, "{header}")?;
        writeln!(f, "{rule}")?;

        for inst in self.program {
            let line = format!(
                "{:<6}{:<10}{:<10}{:<10}{:<12}{:<6}{}",
                inst.opcode(),
                inst.operand(0),
                inst.operand(1),
                inst.operand(2),
                inst.category(),
                inst.stall_cycles(),
                u8::from(inst.is_mispredicted()),
            );
            writeln!(f, "{}", line.trim_end())?;
        }

        writeln!(f)?;
        write!(f, "{}", self.summary())
    }
}
