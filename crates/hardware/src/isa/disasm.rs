//! Instruction Disassembler for the supported RV32I subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing and test diagnostics. Immediates are taken from
//! [`decode`], so the text always agrees with what the pipeline executes.
//!
//! # Usage
//!
//! ```
//! use rv5s_core::isa::disasm::disassemble;
//! let text = disassemble(0x00500093); // ADDI x1, x0, 5
//! assert_eq!(text, "addi ra, zero, 5");
//! ```

use crate::common::constants::HALT_INSTRUCTION;
use crate::isa::decode::decode;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"`, `"halt"` for the halt
/// sentinel, or `"unknown"` for encodings outside the supported subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    if inst == HALT_INSTRUCTION {
        return "halt".to_string();
    }

    let d = decode(inst);
    let (rd, rs1, rs2) = (xreg(d.rd), xreg(d.rs1), xreg(d.rs2));

    match d.opcode {
        op::OP_REG => {
            let mn = match d.funct3 {
                f3::ADD_SUB if d.funct7 & f7::ALT_BIT != 0 => "sub",
                f3::ADD_SUB => "add",
                f3::XOR => "xor",
                f3::OR => "or",
                f3::AND => "and",
                _ => return "unknown".to_string(),
            };
            format!("{mn} {rd}, {rs1}, {rs2}")
        }
        op::OP_IMM => {
            let mn = match d.funct3 {
                f3::ADD_SUB => "addi",
                f3::XOR => "xori",
                f3::OR => "ori",
                f3::AND => "andi",
                _ => return "unknown".to_string(),
            };
            format!("{mn} {rd}, {rs1}, {}", d.imm_i)
        }
        op::OP_LOAD if d.funct3 == f3::LW => format!("lw {rd}, {}({rs1})", d.imm_i),
        op::OP_STORE if d.funct3 == f3::SW => format!("sw {rs2}, {}({rs1})", d.imm_s),
        op::OP_BRANCH => {
            let mn = match d.funct3 {
                f3::BEQ => "beq",
                f3::BNE => "bne",
                _ => return "unknown".to_string(),
            };
            format!("{mn} {rs1}, {rs2}, {}", d.imm_b)
        }
        op::OP_JAL => format!("jal {rd}, {}", d.imm_j),
        _ => "unknown".to_string(),
    }
}
