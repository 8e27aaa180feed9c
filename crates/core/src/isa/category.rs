//! Opcode classification.
//!
//! Every opcode maps to exactly one [`Category`] by prefix, and to one
//! [`Form`] by exact mnemonic. Both are resolved once when an instruction is
//! built so the hazard engine never compares opcode strings.

use std::fmt;

/// Coarse instruction class used for stall accounting and producer detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `ADD*` and `SUB*` opcodes.
    Arithmetic,
    /// Anything not matched by another category.
    Logical,
    /// `LD*` and `ST*` opcodes.
    Memory,
    /// `B*` opcodes.
    Branch,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 4] = [Self::Arithmetic, Self::Logical, Self::Memory, Self::Branch];

    /// Upper-case label printed in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Arithmetic => "ARITHMETIC",
            Self::Logical => "LOGICAL",
            Self::Memory => "MEMORY",
            Self::Branch => "BRANCH",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Arithmetic => 0,
            Self::Logical => 1,
            Self::Memory => 2,
            Self::Branch => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Opcode shape within a category.
///
/// The form decides which operand slots are read and whether the instruction
/// writes its first slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    /// Register-register ALU operation: `OP rd rs rt`.
    Register,
    /// Register-immediate ALU operation (`ADDI`, `SUBI`, `ANDI`, `ORI`).
    Immediate,
    /// `LD rd offset(rs)`, the only memory form that writes a register.
    Load,
    /// Any other memory opcode.
    Store,
    /// `BZ`, tests a single register.
    BranchZero,
    /// Any other branch, compares two registers.
    BranchCompare,
}

/// Classifies an opcode by prefix. First match wins; unknown opcodes are
/// [`Category::Logical`].
///
/// # Examples
///
/// ```
/// use stallscope_core::isa::{Category, classify};
///
/// assert_eq!(classify("LD"), Category::Memory);
/// assert_eq!(classify("SUBI"), Category::Arithmetic);
/// assert_eq!(classify("BNEZ"), Category::Branch);
/// assert_eq!(classify("XOR"), Category::Logical);
/// ```
pub fn classify(opcode: &str) -> Category {
    if opcode.starts_with("LD") || opcode.starts_with("ST") {
        Category::Memory
    } else if opcode.starts_with("ADD") || opcode.starts_with("SUB") {
        Category::Arithmetic
    } else if opcode.starts_with('B') {
        Category::Branch
    } else {
        Category::Logical
    }
}

/// Resolves the opcode form within an already classified category.
pub fn form(category: Category, opcode: &str) -> Form {
    match category {
        Category::Arithmetic => match opcode {
            "ADDI" | "SUBI" => Form::Immediate,
            _ => Form::Register,
        },
        Category::Logical => match opcode {
            "ANDI" | "ORI" => Form::Immediate,
            _ => Form::Register,
        },
        Category::Memory => match opcode {
            "LD" => Form::Load,
            _ => Form::Store,
        },
        Category::Branch => match opcode {
            "BZ" => Form::BranchZero,
            _ => Form::BranchCompare,
        },
    }
}
