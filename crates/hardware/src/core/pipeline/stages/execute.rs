//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It
//! performs the following:
//! 1. **Operand Read:** Reads `rs1`/`rs2` from the register file (after this cycle's writeback).
//! 2. **Dispatch:** Routes the instruction to the ALU, LSU, or BRU by its control signals.
//! 3. **Control Flow:** Resolves branches and jumps and reports the redirect target.

use tracing::debug;

use crate::core::pipeline::engine::FiveStageCore;
use crate::core::pipeline::latches::MemEntry;
use crate::core::pipeline::signals::BranchCond;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::disasm::disassemble;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `core` - Mutable reference to the pipelined core
///
/// # Returns
///
/// `Some(target)` when a jump or taken branch redirects the fetch stream,
/// `None` otherwise.
pub fn execute_stage(core: &mut FiveStageCore) -> Option<u32> {
    let ex = core.current.ex;
    if ex.nop {
        core.next.mem = MemEntry::bubble();
        return None;
    }

    let rv1 = core.regs.read(ex.rs1);
    let rv2 = core.regs.read(ex.rs2);
    let ctrl = ex.ctrl;

    let mut redirect = None;
    let mut store_data = 0;

    let alu_result = if ctrl.jump {
        let j = Bru::jump(ex.pc, ex.imm);
        redirect = Some(j.target);
        j.link
    } else if ctrl.branch != BranchCond::None {
        let b = Bru::resolve(ctrl.branch, ex.pc, rv1, rv2, ex.imm);
        if b.taken {
            redirect = Some(b.target);
            core.stats.branches_taken += 1;
        }
        b.target
    } else if ctrl.read_mem {
        Lsu::load_address(rv1, ex.imm)
    } else if ctrl.write_mem {
        let s = Lsu::store_access(rv1, rv2, ex.imm);
        store_data = s.data;
        s.addr
    } else {
        let b = if ctrl.is_immediate { ex.imm as u32 } else { rv2 };
        Alu::execute(ctrl.alu, rv1, b)
    };

    if core.trace {
        debug!(
            target: "rv5s::pipeline",
            "EX  pc={:#06x} {:<24} result={:#010x}{}",
            ex.pc,
            disassemble(ex.instr),
            alu_result,
            redirect.map_or_else(String::new, |t| format!(" redirect={t:#x}"))
        );
    }

    core.next.mem = MemEntry {
        pc: ex.pc,
        instr: ex.instr,
        alu_result,
        store_data,
        rs1: ex.rs1,
        rs2: ex.rs2,
        rd: ex.rd,
        ctrl,
        nop: false,
    };

    redirect
}
