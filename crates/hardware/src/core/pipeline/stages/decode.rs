//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Squash:** Discards the instruction when execute redirected the fetch stream this cycle.
//! 2. **Hazard Detection:** Stalls behind a producer in execute (no forwarding exists).
//! 3. **Decoding:** Converts raw instruction bits into fields using the ISA decoder.
//! 4. **Control Generation:** Generates ALU, memory, and branch control signals for execute.
//!
//! Unsupported encodings become bubbles rather than faults.

use tracing::{debug, warn};

use crate::common::error::SimError;
use crate::core::pipeline::engine::FiveStageCore;
use crate::core::pipeline::hazards::need_stall_raw;
use crate::core::pipeline::latches::ExEntry;
use crate::core::pipeline::signals::{AluOp, BranchCond, ControlSignals};
use crate::core::pipeline::stages::DecodeAction;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode::decode as instruction_decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{Decoded, Format};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Generates control signals for a decoded instruction.
///
/// # Errors
///
/// Returns [`SimError::UnsupportedInstruction`] for opcodes or function codes
/// outside ADD, SUB, XOR, OR, AND, ADDI, XORI, ORI, ANDI, LW, SW, BEQ, BNE, and JAL.
pub fn control_signals(d: &Decoded) -> Result<ControlSignals, SimError> {
    let unsupported = || SimError::UnsupportedInstruction { inst: d.raw };
    let alu_op = |f3: u32| match f3 {
        funct3::ADD_SUB => Some(AluOp::Add),
        funct3::XOR => Some(AluOp::Xor),
        funct3::OR => Some(AluOp::Or),
        funct3::AND => Some(AluOp::And),
        _ => None,
    };

    let mut c = ControlSignals::default();
    match d.opcode {
        opcodes::OP_REG => {
            c.write_enable = true;
            c.alu = match alu_op(d.funct3).ok_or_else(unsupported)? {
                AluOp::Add if d.funct7 & funct7::ALT_BIT != 0 => AluOp::Sub,
                op => op,
            };
        }
        opcodes::OP_IMM => {
            c.write_enable = true;
            c.is_immediate = true;
            c.alu = alu_op(d.funct3).ok_or_else(unsupported)?;
        }
        opcodes::OP_LOAD if d.funct3 == funct3::LW => {
            c.write_enable = true;
            c.read_mem = true;
        }
        opcodes::OP_STORE if d.funct3 == funct3::SW => {
            c.write_mem = true;
        }
        opcodes::OP_BRANCH => {
            c.branch = match d.funct3 {
                funct3::BEQ => BranchCond::Eq,
                funct3::BNE => BranchCond::Ne,
                _ => return Err(unsupported()),
            };
        }
        opcodes::OP_JAL => {
            c.write_enable = true;
            c.jump = true;
        }
        _ => return Err(unsupported()),
    }
    Ok(c)
}

/// Returns the immediate the execute stage uses for `d`'s format.
pub const fn format_immediate(d: &Decoded) -> i32 {
    match d.format {
        Format::I => d.imm_i,
        Format::S => d.imm_s,
        Format::B => d.imm_b,
        Format::J => d.imm_j,
        Format::R | Format::Unknown => 0,
    }
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `core` - Mutable reference to the pipelined core.
/// * `redirect` - Fetch redirect produced by execute this cycle, if any.
///
/// # Returns
///
/// What fetch must do this cycle: advance, hold (stall), or nothing special
/// because the redirect already owns it (squash).
pub fn decode_stage(core: &mut FiveStageCore, redirect: Option<u32>) -> DecodeAction {
    let id = core.current.id;
    if id.nop {
        core.next.ex = ExEntry::bubble();
        return DecodeAction::Advance;
    }

    if redirect.is_some() {
        core.next.ex = ExEntry::bubble();
        if core.trace {
            debug!(target: "rv5s::pipeline", "ID  pc={:#06x} {:<24} squashed", id.pc, disassemble(id.instr));
        }
        return DecodeAction::Squash;
    }

    let d = instruction_decode(id.instr);

    if need_stall_raw(&core.current.ex, &d) {
        core.next.id = id;
        core.next.ex = ExEntry::bubble();
        core.stats.stalls_data += 1;
        if core.trace {
            debug!(
                target: "rv5s::pipeline",
                "ID  pc={:#06x} {:<24} stall on x{}",
                id.pc,
                disassemble(id.instr),
                core.current.ex.rd
            );
        }
        return DecodeAction::Stall;
    }

    core.next.ex = match control_signals(&d) {
        Ok(ctrl) => ExEntry {
            pc: id.pc,
            instr: id.instr,
            rs1: d.rs1,
            rs2: d.rs2,
            rd: d.rd,
            read_data1: core.regs.read(d.rs1),
            read_data2: core.regs.read(d.rs2),
            imm: format_immediate(&d),
            ctrl,
            nop: false,
        },
        Err(e) => {
            warn!(target: "rv5s::pipeline", pc = id.pc, "{e}; inserting bubble");
            core.stats.unsupported += 1;
            ExEntry::bubble()
        }
    };

    DecodeAction::Advance
}
