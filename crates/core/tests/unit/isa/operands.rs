//! Read Operand Selection Tests.
//!
//! Verifies which slots each category and form reads, and that register
//! matching only looks at those slots.

use rstest::rstest;
use stallscope_core::isa::{Category, Instruction, OperandSlot, read_operands};

use OperandSlot::{Slot1, Slot2, Slot3};

// ══════════════════════════════════════════════════════════
// 1. Slot table
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(Category::Branch, "BZ", Slot1, Slot1)]
#[case(Category::Branch, "BEQ", Slot1, Slot2)]
#[case(Category::Branch, "BNE", Slot1, Slot2)]
#[case(Category::Arithmetic, "ADDI", Slot2, Slot2)]
#[case(Category::Arithmetic, "SUBI", Slot2, Slot2)]
#[case(Category::Arithmetic, "ADD", Slot2, Slot3)]
#[case(Category::Arithmetic, "SUB", Slot2, Slot3)]
#[case(Category::Logical, "ANDI", Slot2, Slot2)]
#[case(Category::Logical, "ORI", Slot2, Slot2)]
#[case(Category::Logical, "AND", Slot2, Slot3)]
#[case(Category::Logical, "XOR", Slot2, Slot3)]
#[case(Category::Memory, "LD", Slot2, Slot2)]
#[case(Category::Memory, "ST", Slot1, Slot2)]
fn slot_table(
    #[case] category: Category,
    #[case] opcode: &str,
    #[case] a: OperandSlot,
    #[case] b: OperandSlot,
) {
    let reads = read_operands(category, opcode);
    assert_eq!((reads.a, reads.b), (a, b), "opcode {opcode}");
}

#[test]
fn slots_collapse_single_reads() {
    let single = read_operands(Category::Memory, "LD");
    assert!(single.is_single());
    assert_eq!(single.slots().collect::<Vec<_>>(), vec![Slot2]);

    let pair = read_operands(Category::Memory, "ST");
    assert!(!pair.is_single());
    assert_eq!(pair.slots().collect::<Vec<_>>(), vec![Slot1, Slot2]);
}

#[test]
fn slot_indices() {
    assert_eq!(Slot1.index(), 0);
    assert_eq!(Slot2.index(), 1);
    assert_eq!(Slot3.index(), 2);
}

// ══════════════════════════════════════════════════════════
// 2. Register matching
// ══════════════════════════════════════════════════════════

#[test]
fn register_form_ignores_destination() {
    let inst = Instruction::new("ADD", &["R1", "R2", "R3"]);
    assert!(!inst.reads("R1"));
    assert!(inst.reads("R2"));
    assert!(inst.reads("R3"));
}

#[test]
fn immediate_form_ignores_immediate() {
    let inst = Instruction::new("ADDI", &["R1", "R2", "R3"]);
    assert!(inst.reads("R2"));
    assert!(!inst.reads("R3"));
}

#[test]
fn store_reads_both_registers() {
    let inst = Instruction::new("ST", &["R5", "R6", "8"]);
    assert!(inst.reads("R5"));
    assert!(inst.reads("R6"));
    assert!(!inst.reads("8"));
}

#[test]
fn branch_zero_reads_only_tested_register() {
    let inst = Instruction::new("BZ", &["R4", "LOOP"]);
    assert!(inst.reads("R4"));
    assert!(!inst.reads("LOOP"));
}

#[test]
fn matching_is_textual() {
    let inst = Instruction::new("AND", &["R1", "r2", "R02"]);
    assert!(!inst.reads("R2"));
    assert!(inst.reads("r2"));
    assert!(inst.reads("R02"));
}

#[test]
fn empty_slots_never_match() {
    let inst = Instruction::new("ADD", &["R1", "R2"]);
    assert_eq!(inst.operand(2), "");
    assert!(!inst.reads(""));
    assert!(inst.reads("R2"));
}

#[test]
fn empty_destination_writes_nothing() {
    let inst = Instruction::new("ADD", &[] as &[&str]);
    assert!(inst.is_producer());
    assert_eq!(inst.written_register(), None);
}
