//! Decoded instruction record.
//!
//! An [`Instruction`] carries its opcode and three operand slots, the
//! category and form resolved from the opcode, and the hazard state the
//! engine fills in during one run.

use std::fmt;

use super::category::{self, Category, Form};
use super::operands::{OperandSlot, ReadOperands};
use crate::common::constants::OPERAND_SLOTS;
use crate::stats::HazardKind;

/// A single decoded instruction plus its per-run hazard state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    opcode: String,
    operands: [String; OPERAND_SLOTS],
    category: Category,
    form: Form,
    reads: ReadOperands,
    stall_cycles: u32,
    stall_source: Option<HazardKind>,
    mispredicted: bool,
}

impl Instruction {
    /// Builds an instruction from an opcode and up to three operands.
    ///
    /// Missing trailing operands are left empty. Operands beyond the third are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use stallscope_core::isa::{Category, Instruction};
    ///
    /// let inst = Instruction::new("BZ", &["R1", "LOOP"]);
    /// assert_eq!(inst.category(), Category::Branch);
    /// assert_eq!(inst.operand(2), "");
    /// ```
    pub fn new<S: AsRef<str>>(opcode: &str, operands: &[S]) -> Self {
        let mut slots: [String; OPERAND_SLOTS] = Default::default();
        for (slot, value) in slots.iter_mut().zip(operands) {
            value.as_ref().clone_into(slot);
        }

        let category = category::classify(opcode);
        let form = category::form(category, opcode);
        Self {
            opcode: opcode.to_owned(),
            operands: slots,
            category,
            form,
            reads: ReadOperands::for_form(form),
            stall_cycles: 0,
            stall_source: None,
            mispredicted: false,
        }
    }

    /// Opcode mnemonic.
    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    /// Operand text by zero-based index; empty when absent or out of range.
    pub fn operand(&self, index: usize) -> &str {
        self.operands.get(index).map_or("", String::as_str)
    }

    /// Operand text in a named slot.
    pub fn slot(&self, slot: OperandSlot) -> &str {
        &self.operands[slot.index()]
    }

    /// All three operand slots.
    pub fn operands(&self) -> &[String; OPERAND_SLOTS] {
        &self.operands
    }

    /// Category resolved from the opcode.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Form resolved from the opcode.
    pub fn form(&self) -> Form {
        self.form
    }

    /// Read operand slots.
    pub fn read_operands(&self) -> ReadOperands {
        self.reads
    }

    /// Stall cycles charged to this instruction in the current run.
    pub fn stall_cycles(&self) -> u32 {
        self.stall_cycles
    }

    /// Hazard kind that produced the stall, if any.
    pub fn stall_source(&self) -> Option<HazardKind> {
        self.stall_source
    }

    /// Whether this branch was mispredicted in the current run.
    pub fn is_mispredicted(&self) -> bool {
        self.mispredicted
    }

    /// Whether this instruction writes a register visible to later readers.
    ///
    /// Arithmetic and logical operations write their first slot, as do loads.
    pub fn is_producer(&self) -> bool {
        matches!(self.category, Category::Arithmetic | Category::Logical) || self.form == Form::Load
    }

    /// Register written by this instruction, if it is a producer with a
    /// non-empty destination.
    pub fn written_register(&self) -> Option<&str> {
        let dest = self.slot(OperandSlot::Slot1);
        (self.is_producer() && !dest.is_empty()).then_some(dest)
    }

    /// Whether `register` is one of this instruction's read operands.
    ///
    /// Empty operand slots never match.
    pub fn reads(&self, register: &str) -> bool {
        !register.is_empty() && self.reads.slots().any(|slot| self.slot(slot) == register)
    }

    /// Charges a stall to this instruction. Only the first charge of a run
    /// takes effect; returns whether this one did.
    pub(crate) fn assign_stall(&mut self, kind: HazardKind, cycles: u32) -> bool {
        if self.stall_cycles != 0 || cycles == 0 {
            return false;
        }
        self.stall_cycles = cycles;
        self.stall_source = Some(kind);
        true
    }

    pub(crate) fn mark_mispredicted(&mut self) {
        self.mispredicted = true;
    }

    /// Clears all per-run hazard state.
    pub fn reset(&mut self) {
        self.stall_cycles = 0;
        self.stall_source = None;
        self.mispredicted = false;
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.opcode)?;
        for operand in self.operands.iter().filter(|o| !o.is_empty()) {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}
