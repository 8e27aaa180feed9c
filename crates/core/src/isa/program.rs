//! Instruction sequence in program (= issue) order.

use std::ops::{Deref, Index};

use super::instruction::Instruction;

/// An ordered, index-addressable instruction sequence.
///
/// Each analysis run owns its own `Program`; clone the parsed program to get
/// a fresh copy with clean hazard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps an instruction list.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Appends an instruction.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Mutable view used by the hazard engine.
    pub fn as_mut_slice(&mut self) -> &mut [Instruction] {
        &mut self.instructions
    }

    /// Sum of stall cycles over all instructions.
    pub fn total_stalls(&self) -> u64 {
        self.instructions
            .iter()
            .map(|i| u64::from(i.stall_cycles()))
            .sum()
    }

    /// Number of instructions marked mispredicted.
    pub fn mispredictions(&self) -> u64 {
        self.instructions
            .iter()
            .filter(|i| i.is_mispredicted())
            .count() as u64
    }

    /// Clears hazard state on every instruction.
    pub fn reset(&mut self) {
        self.instructions.iter_mut().for_each(Instruction::reset);
    }

    /// Consumes the program, returning its instructions.
    pub fn into_inner(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl Deref for Program {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.instructions
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.instructions[index]
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
