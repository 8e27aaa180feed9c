//! Read operand selection.
//!
//! Identifies which operand slots of an instruction are *read*, i.e. the ones
//! a hazard detector compares against a producer's written register. When
//! both selected slots are the same the instruction has a single read operand.

use super::category::{self, Category, Form};

/// One of the three operand slots following the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandSlot {
    /// First operand; the destination for producers.
    Slot1,
    /// Second operand.
    Slot2,
    /// Third operand.
    Slot3,
}

impl OperandSlot {
    /// Zero-based position in the operand array.
    pub const fn index(self) -> usize {
        match self {
            Self::Slot1 => 0,
            Self::Slot2 => 1,
            Self::Slot3 => 2,
        }
    }
}

/// The pair of slots read by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadOperands {
    /// First read slot.
    pub a: OperandSlot,
    /// Second read slot; equal to `a` for single-read forms.
    pub b: OperandSlot,
}

impl ReadOperands {
    const fn pair(a: OperandSlot, b: OperandSlot) -> Self {
        Self { a, b }
    }

    const fn single(slot: OperandSlot) -> Self {
        Self { a: slot, b: slot }
    }

    /// Read slots for an opcode form.
    pub const fn for_form(form: Form) -> Self {
        use OperandSlot::{Slot1, Slot2, Slot3};
        match form {
            Form::BranchZero => Self::single(Slot1),
            Form::BranchCompare | Form::Store => Self::pair(Slot1, Slot2),
            Form::Immediate | Form::Load => Self::single(Slot2),
            Form::Register => Self::pair(Slot2, Slot3),
        }
    }

    /// True when only one distinct slot is read.
    pub fn is_single(self) -> bool {
        self.a == self.b
    }

    /// Distinct slots, in order.
    pub fn slots(self) -> impl Iterator<Item = OperandSlot> {
        let second = (!self.is_single()).then_some(self.b);
        std::iter::once(self.a).chain(second)
    }
}

/// Selects the read operand slots for an opcode of the given category.
///
/// # Examples
///
/// ```
/// use stallscope_core::isa::{Category, OperandSlot, read_operands};
///
/// let reads = read_operands(Category::Arithmetic, "ADDI");
/// assert_eq!((reads.a, reads.b), (OperandSlot::Slot2, OperandSlot::Slot2));
///
/// let reads = read_operands(Category::Memory, "ST");
/// assert_eq!((reads.a, reads.b), (OperandSlot::Slot1, OperandSlot::Slot2));
/// ```
pub fn read_operands(category: Category, opcode: &str) -> ReadOperands {
    ReadOperands::for_form(category::form(category, opcode))
}
