//! Instruction text tokenizer.
//!
//! One instruction per line: an opcode followed by up to three operands.
//! Fields are separated by runs of ASCII whitespace or commas, so
//! `ADD R1 R2 R3` and `ADD R1,R2,R3` decode the same. Blank lines and lines
//! starting with `#` carry no instruction.

use tracing::warn;

use super::instruction::Instruction;
use super::program::Program;
use crate::common::constants::OPERAND_SLOTS;

const COMMENT: char = '#';

fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|f| !f.is_empty())
}

/// Decodes one source line. Returns `None` for blank and comment lines.
///
/// # Examples
///
/// ```
/// use stallscope_core::isa::tokenize::parse_line;
///
/// let inst = parse_line("LD R4 0(R2)").unwrap();
/// assert_eq!(inst.opcode(), "LD");
/// assert_eq!(inst.operand(1), "0(R2)");
/// assert!(parse_line("   ").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Instruction> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
        return None;
    }

    let mut it = fields(line);
    let opcode = it.next()?;
    let operands: Vec<&str> = it.collect();
    Some(Instruction::new(opcode, &operands))
}

/// Decodes a whole program, one instruction per non-blank line.
///
/// Tokens past the third operand are dropped with a warning.
pub fn parse_program(source: &str) -> Program {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let inst = parse_line(line)?;
            let extra = fields(line.trim()).count().saturating_sub(OPERAND_SLOTS + 1);
            if extra > 0 {
                warn!(line = idx + 1, extra, text = line.trim(), "ignoring surplus operands");
            }
            Some(inst)
        })
        .collect()
}
