use super::builder::program::ProgramBuilder;
use super::harness::TestContext;
use super::mocks::oracle::{ScriptedOracle, expecting};
use stallscope_core::core::MispredictOracle;
use stallscope_core::isa::{Category, Form};

// ─── ProgramBuilder: operand layout ────────────────────────────────────────

#[test]
fn builder_add_lays_out_three_registers() {
    let prog = ProgramBuilder::new().add(1, 2, 3).build();
    assert_eq!(prog.len(), 1);
    assert_eq!(prog[0].opcode(), "ADD");
    assert_eq!(prog[0].operands(), &["R1".to_owned(), "R2".to_owned(), "R3".to_owned()]);
    assert_eq!(prog[0].category(), Category::Arithmetic);
}

#[test]
fn builder_immediate_forms() {
    let prog = ProgramBuilder::new().addi(1, 2, -4).andi(3, 1, 255).build();
    assert_eq!(prog[0].form(), Form::Immediate);
    assert_eq!(prog[0].operand(2), "-4");
    assert_eq!(prog[1].category(), Category::Logical);
    assert_eq!(prog[1].form(), Form::Immediate);
}

#[test]
fn builder_memory_and_branch_forms() {
    let prog = ProgramBuilder::new()
        .ld(4, 2, 8)
        .st(4, 5, 0)
        .bz(4, "L1")
        .beq(1, 2, "L2")
        .build();
    assert_eq!(prog[0].form(), Form::Load);
    assert_eq!(prog[1].form(), Form::Store);
    assert_eq!(prog[2].form(), Form::BranchZero);
    assert_eq!(prog[2].operand(2), "");
    assert_eq!(prog[3].form(), Form::BranchCompare);
}

#[test]
fn builder_nop_has_no_operands() {
    let prog = ProgramBuilder::new().nop().build();
    assert!(prog[0].operands().iter().all(String::is_empty));
    assert_eq!(prog[0].written_register(), None);
}

// ─── Oracles ───────────────────────────────────────────────────────────────

#[test]
fn scripted_oracle_replays_then_falls_back() {
    let mut oracle = ScriptedOracle::new(&[true, false, true]);
    let draws: Vec<bool> = (0..5).map(|_| oracle.mispredicts()).collect();
    assert_eq!(draws, vec![true, false, true, false, false]);
    assert_eq!(oracle.calls, 5);
}

#[test]
fn always_oracle_always_misses() {
    let mut oracle = ScriptedOracle::always();
    assert!((0..100).all(|_| oracle.mispredicts()));
}

#[test]
fn mock_oracle_answers_expected_calls() {
    let mut mock = expecting(2, true);
    assert!(mock.mispredicts());
    assert!(mock.mispredicts());
}

// ─── TestContext ───────────────────────────────────────────────────────────

#[test]
fn context_starts_with_zero_counters() {
    let ctx = TestContext::from_source("ADD R1 R2 R3\n");
    assert_eq!(ctx.counters.as_array(), [0; 6]);
    assert_eq!(ctx.stalls(), vec![0]);
    assert_eq!(ctx.mispredicted(), vec![false]);
}
