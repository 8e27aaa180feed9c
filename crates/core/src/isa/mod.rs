//! Instruction model for the MIPS-like pipeline.
//!
//! 1. **Classification:** Opcode → category and form.
//! 2. **Operands:** Which slots an instruction reads.
//! 3. **Records:** Decoded instructions and the program sequence.
//! 4. **Tokenizer:** Text lines → instructions.

/// Category and form classification.
pub mod category;

/// Decoded instruction record.
pub mod instruction;

/// Read operand selection.
pub mod operands;

/// Ordered instruction sequence.
pub mod program;

/// Text tokenizer.
pub mod tokenize;

pub use category::{Category, Form, classify};
pub use instruction::Instruction;
pub use operands::{OperandSlot, ReadOperands, read_operands};
pub use program::Program;
pub use tokenize::{parse_line, parse_program};
