//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It
//! fetches the word at the current PC and advances the PC by 4, unless:
//! 1. **Redirect:** Execute resolved a jump or taken branch; fetch restarts at the target.
//! 2. **Stall:** Decode is frozen by a hazard; the PC is held.
//! 3. **Halt:** The fetched word is the halt sentinel, or the PC has left
//!    instruction memory; fetch parks itself.
//!
//! There is no branch prediction. A halt sentinel fetched while a branch or
//! jump sits in decode may be on the wrong path, so the halt flag is only
//! raised once no redirect can still arrive.

use tracing::{debug, error};

use crate::common::constants::{HALT_INSTRUCTION, INSTRUCTION_SIZE};
use crate::core::pipeline::engine::FiveStageCore;
use crate::core::pipeline::latches::{IdEntry, IfEntry};
use crate::core::pipeline::stages::DecodeAction;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Returns `true` if the instruction in decode could still redirect fetch.
fn control_flow_in_decode(core: &FiveStageCore) -> bool {
    let id = core.current.id;
    !id.nop && matches!(id.instr.opcode(), opcodes::OP_BRANCH | opcodes::OP_JAL)
}

/// Stops fetching at `pc` and lets the pipeline drain.
fn park(core: &mut FiveStageCore, pc: u32) {
    core.next.if_stage = IfEntry { pc, nop: true };
    core.next.id = IdEntry::bubble();
    if !control_flow_in_decode(core) {
        core.halt_fetched = true;
    }
}

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `core` - Mutable reference to the pipelined core
/// * `redirect` - Fetch redirect produced by execute this cycle, if any
/// * `action` - What decode did this cycle
pub fn fetch_stage(core: &mut FiveStageCore, redirect: Option<u32>, action: DecodeAction) {
    if let Some(target) = redirect {
        core.next.if_stage = IfEntry {
            pc: target,
            nop: false,
        };
        core.next.id = IdEntry::bubble();
        core.stats.flushes_control += 1;
        if core.trace {
            debug!(target: "rv5s::pipeline", "IF  redirect to {target:#06x}");
        }
        return;
    }

    if action == DecodeAction::Stall {
        // Decode already re-latched its instruction.
        core.next.if_stage = core.current.if_stage;
        return;
    }

    let fetch = core.current.if_stage;
    if fetch.nop {
        core.next.if_stage = fetch;
        core.next.id = IdEntry::bubble();
        core.halt_fetched = true;
        return;
    }

    let instr = match core.imem.try_read_instr(fetch.pc) {
        Ok(word) => word,
        Err(e) => {
            error!(target: "rv5s::imem", "{e}; parking fetch");
            park(core, fetch.pc);
            return;
        }
    };

    if instr == HALT_INSTRUCTION {
        park(core, fetch.pc);
        if core.trace {
            debug!(target: "rv5s::pipeline", "IF  pc={:#06x} halt", fetch.pc);
        }
        return;
    }

    core.next.id = IdEntry {
        pc: fetch.pc,
        instr,
        nop: false,
    };
    core.next.if_stage = IfEntry {
        pc: fetch.pc.wrapping_add(INSTRUCTION_SIZE),
        nop: false,
    };
    if core.trace {
        debug!(target: "rv5s::pipeline", "IF  pc={:#06x} inst={:#010x}", fetch.pc, instr);
    }
}
