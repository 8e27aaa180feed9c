//! # ISA Unit Tests
//!
//! This module contains unit tests for the instruction model.
//! It covers opcode classification, read operand selection, and tokenizing.


/// Read operand selection tests.
///
/// Verifies the slot table for every category and form, and how empty slots
/// behave in register matching.
pub mod operands;

/// Tokenizer tests.
///
/// Verifies field splitting, trailing empty slots, and skipped lines.
pub mod tokenize;
