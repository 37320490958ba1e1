//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. Each
//! live instruction performs exactly one of: a data-memory load, a
//! data-memory store, or a pass-through of its execute result.

use tracing::debug;

use crate::core::pipeline::engine::FiveStageCore;
use crate::core::pipeline::latches::WbEntry;
use crate::core::pipeline::traits::PipelineLatch;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `core` - Mutable reference to the pipelined core
pub fn mem_stage(core: &mut FiveStageCore) {
    let mem = core.current.mem;
    if mem.nop {
        core.next.wb = WbEntry::bubble();
        return;
    }

    let wrt_data = if mem.ctrl.read_mem {
        let data = core.dmem.read_data(mem.alu_result);
        if core.trace {
            debug!(target: "rv5s::pipeline", "MEM pc={:#06x} load  [{:#x}] -> {:#010x}", mem.pc, mem.alu_result, data);
        }
        data
    } else if mem.ctrl.write_mem {
        core.dmem.write_data(mem.alu_result, mem.store_data);
        if core.trace {
            debug!(target: "rv5s::pipeline", "MEM pc={:#06x} store [{:#x}] <- {:#010x}", mem.pc, mem.alu_result, mem.store_data);
        }
        mem.alu_result
    } else {
        mem.alu_result
    };

    core.next.wb = WbEntry {
        pc: mem.pc,
        instr: mem.instr,
        wrt_data,
        rs1: mem.rs1,
        rs2: mem.rs2,
        rd: mem.rd,
        write_enable: mem.ctrl.write_enable,
        nop: false,
    };
}
