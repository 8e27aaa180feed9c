use stallscope_core::isa::{Instruction, Program};

/// Fluent builder for instruction sequences.
///
/// Registers are given as numbers and rendered as `R<n>`.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    instructions: Vec<Instruction>,
}

fn reg(n: u32) -> String {
    format!("R{n}")
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitrary instruction.
    pub fn raw(mut self, opcode: &str, operands: &[&str]) -> Self {
        self.instructions.push(Instruction::new(opcode, operands));
        self
    }

    fn three(self, opcode: &str, a: u32, b: u32, c: u32) -> Self {
        let ops = [reg(a), reg(b), reg(c)];
        let ops: Vec<&str> = ops.iter().map(String::as_str).collect();
        self.raw(opcode, &ops)
    }

    fn with_imm(self, opcode: &str, rd: u32, rs: u32, imm: i32) -> Self {
        let ops = [reg(rd), reg(rs), imm.to_string()];
        let ops: Vec<&str> = ops.iter().map(String::as_str).collect();
        self.raw(opcode, &ops)
    }

    // --- Helpers for Common Instructions ---

    pub fn add(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.three("ADD", rd, rs, rt)
    }

    pub fn sub(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.three("SUB", rd, rs, rt)
    }

    pub fn and(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.three("AND", rd, rs, rt)
    }

    pub fn or(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.three("OR", rd, rs, rt)
    }

    pub fn addi(self, rd: u32, rs: u32, imm: i32) -> Self {
        self.with_imm("ADDI", rd, rs, imm)
    }

    pub fn andi(self, rd: u32, rs: u32, imm: i32) -> Self {
        self.with_imm("ANDI", rd, rs, imm)
    }

    /// `LD rd rs offset`: reads `rs`, writes `rd`.
    pub fn ld(self, rd: u32, rs: u32, offset: i32) -> Self {
        self.with_imm("LD", rd, rs, offset)
    }

    /// `ST rs rt offset`: reads both registers.
    pub fn st(self, rs: u32, rt: u32, offset: i32) -> Self {
        self.with_imm("ST", rs, rt, offset)
    }

    pub fn bz(self, rs: u32, label: &str) -> Self {
        let r = reg(rs);
        self.raw("BZ", &[r.as_str(), label])
    }

    pub fn beq(self, rs: u32, rt: u32, label: &str) -> Self {
        let (a, b) = (reg(rs), reg(rt));
        self.raw("BEQ", &[a.as_str(), b.as_str(), label])
    }

    pub fn nop(self) -> Self {
        self.raw("NOP", &[])
    }

    pub fn build(self) -> Program {
        Program::new(self.instructions)
    }
}
