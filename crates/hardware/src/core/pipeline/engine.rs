//! Five-stage pipeline engine.
//!
//! This module drives one simulated clock cycle of the pipelined core:
//! 1. **Termination:** Stops once every latch holds a bubble or the cycle budget is spent.
//! 2. **Stage Evaluation:** Runs WB, MEM, EX, ID, IF in that order, each reading the
//!    committed `current` state and writing the `next` state.
//! 3. **Commit:** Replaces `current` with `next` in one assignment and counts the cycle.
//!
//! The reverse evaluation order makes the stages logically simultaneous while
//! letting writeback update the register file before execute reads it.

use tracing::{info, warn};

use crate::common::reg::RegisterFile;
use crate::config::{Config, CoreKind};
use crate::core::pipeline::latches::PipelineState;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::{Core, CycleOutcome};
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Five-stage pipelined core.
///
/// Owns its architectural state (registers, memories), both pipeline register
/// sets, and its counters, so independent instances never interfere.
#[derive(Clone, Debug)]
pub struct FiveStageCore {
    /// Integer register file.
    pub regs: RegisterFile,
    /// Instruction memory read by fetch.
    pub imem: InstructionMemory,
    /// Data memory accessed by the memory stage.
    pub dmem: DataMemory,
    /// Committed pipeline state, visible at the start of a cycle.
    pub current: PipelineState,
    /// Pipeline state being built during a cycle.
    pub next: PipelineState,
    /// Performance counters.
    pub stats: SimStats,
    /// Set once the halt sentinel has been fetched on the committed path. Never cleared.
    pub halt_fetched: bool,
    /// Set once the pipeline has drained (or the cycle budget ran out).
    pub halted: bool,
    /// Emit per-stage `debug` events.
    pub trace: bool,
    max_cycles: u64,
}

impl FiveStageCore {
    /// Creates a core with fetch armed at PC 0 and every other stage empty.
    pub fn new(imem: InstructionMemory, dmem: DataMemory, config: &Config) -> Self {
        let current = PipelineState::reset(0);
        Self {
            regs: RegisterFile::new(),
            imem,
            dmem,
            current,
            next: current,
            stats: SimStats::default(),
            halt_fetched: false,
            halted: false,
            trace: config.general.trace_enabled(),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Runs one cycle of the entire pipeline.
    ///
    /// # Returns
    ///
    /// [`CycleOutcome::Committed`] if a cycle was executed, or
    /// [`CycleOutcome::Halted`] if the pipeline is drained (no cycle is
    /// executed or counted in that case).
    pub fn tick(&mut self) -> CycleOutcome {
        if self.halted {
            return CycleOutcome::Halted;
        }

        if self.current.is_drained() {
            self.halted = true;
            info!(
                target: "rv5s::pipeline",
                cycles = self.stats.cycles,
                instructions = self.stats.instructions_retired,
                "five-stage pipeline drained"
            );
            return CycleOutcome::Halted;
        }

        if self.stats.cycles >= self.max_cycles {
            self.halted = true;
            warn!(
                target: "rv5s::pipeline",
                max_cycles = self.max_cycles,
                "cycle budget exhausted before the pipeline drained"
            );
            return CycleOutcome::Halted;
        }

        self.next = PipelineState::drained(self.current.if_stage.pc);

        wb_stage(self);
        mem_stage(self);
        let redirect = execute_stage(self);
        let action = decode_stage(self, redirect);
        fetch_stage(self, redirect, action);

        self.current = self.next;
        self.stats.cycles += 1;
        CycleOutcome::Committed
    }

    /// Runs cycles until the core halts.
    pub fn run(&mut self) {
        while self.tick() == CycleOutcome::Committed {}
    }
}

impl Core for FiveStageCore {
    fn kind(&self) -> CoreKind {
        CoreKind::Five
    }

    fn step(&mut self) -> CycleOutcome {
        self.tick()
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn stats(&self) -> &SimStats {
        &self.stats
    }

    fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    fn dmem(&self) -> &DataMemory {
        &self.dmem
    }

    fn dump_state(&self) -> Vec<String> {
        self.current.dump_lines()
    }
}
