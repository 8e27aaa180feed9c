//! Tokenizer Tests.
//!
//! Verifies line splitting into opcode and operands, padding of missing
//! operands, and which lines are skipped.

use pretty_assertions::assert_eq;
use rstest::rstest;
use stallscope_core::isa::{Category, parse_line, parse_program};

#[rstest]
#[case("ADD R1 R2 R3", "ADD", ["R1", "R2", "R3"])]
#[case("ADD R1,R2,R3", "ADD", ["R1", "R2", "R3"])]
#[case("ADD R1, R2, R3", "ADD", ["R1", "R2", "R3"])]
#[case("  SUBI\tR4  R1\t-8  ", "SUBI", ["R4", "R1", "-8"])]
#[case("BZ R1 L1", "BZ", ["R1", "L1", ""])]
#[case("LD R4 0(R2)", "LD", ["R4", "0(R2)", ""])]
#[case("NOP", "NOP", ["", "", ""])]
fn splits_fields(#[case] line: &str, #[case] opcode: &str, #[case] operands: [&str; 3]) {
    let inst = parse_line(line).unwrap();
    assert_eq!(inst.opcode(), opcode);
    assert_eq!(inst.operands().each_ref().map(|s| s.as_str()), operands);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\r")]
#[case("# comment")]
#[case("   # indented comment")]
fn skips_lines_without_instructions(#[case] line: &str) {
    assert!(parse_line(line).is_none());
}

#[test]
fn surplus_operands_are_dropped() {
    let inst = parse_line("ADD R1 R2 R3 R4 R5").unwrap();
    assert_eq!(inst.operands().each_ref().map(|s| s.as_str()), ["R1", "R2", "R3"]);
}

#[test]
fn program_keeps_line_order() {
    let source = "\
# prologue
LD R1 0(R2)

ADD R3 R1 R4
BEQ R3 R0 END
ST R3 R5 4
";
    let program = parse_program(source);
    let opcodes: Vec<&str> = program.iter().map(|i| i.opcode()).collect();
    assert_eq!(opcodes, vec!["LD", "ADD", "BEQ", "ST"]);

    let categories: Vec<Category> = program.iter().map(|i| i.category()).collect();
    assert_eq!(
        categories,
        vec![
            Category::Memory,
            Category::Arithmetic,
            Category::Branch,
            Category::Memory
        ]
    );
}

#[test]
fn parsed_instructions_start_clean() {
    let program = parse_program("BZ R1 L\nADD R1 R2 R3\n");
    assert!(program.iter().all(|i| i.stall_cycles() == 0));
    assert!(program.iter().all(|i| !i.is_mispredicted()));
    assert!(program.iter().all(|i| i.stall_source().is_none()));
}

#[test]
fn empty_source_yields_empty_program() {
    assert!(parse_program("").is_empty());
    assert!(parse_program("\n\n# only comments\n").is_empty());
}

#[test]
fn display_omits_empty_operands() {
    let inst = parse_line("BZ R1 L1").unwrap();
    assert_eq!(inst.to_string(), "BZ R1 L1");
}
