//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! commits results to the register file and counts retired instructions.
//! Writes to `x0` are suppressed.

use tracing::debug;

use crate::core::pipeline::engine::FiveStageCore;
use crate::isa::disasm::disassemble;

/// Executes the writeback stage of the pipeline.
///
/// Runs first in the cycle, so a value written here is visible to the
/// execute stage of the same cycle.
///
/// # Arguments
///
/// * `core` - Mutable reference to the pipelined core
pub fn wb_stage(core: &mut FiveStageCore) {
    let wb = core.current.wb;
    if wb.nop {
        return;
    }

    if wb.write_enable && wb.rd != 0 {
        core.regs.write(wb.rd, wb.wrt_data);
    }
    core.stats.instructions_retired += 1;

    if core.trace {
        debug!(
            target: "rv5s::pipeline",
            "WB  pc={:#06x} {:<24} x{} <= {:#010x}",
            wb.pc,
            disassemble(wb.instr),
            wb.rd,
            wb.wrt_data
        );
    }
}
