//! Processor cores.
//!
//! This module contains both core models and the interface the simulator drives them through:
//! 1. **Single Stage:** A non-pipelined reference core, one instruction per cycle.
//! 2. **Pipeline:** The five-stage pipelined core (stages, latches, hazards, signals).
//! 3. **Units:** Functional units shared by both cores (ALU, BRU, LSU).
//! 4. **Dispatch:** `AnyCore`, an enum over the two models for type-erased storage.

/// Instruction pipeline implementation (engine, stages, latches, hazards, signals).
pub mod pipeline;

/// Non-pipelined reference core.
pub mod single_stage;

/// Execution units (ALU, branch unit, load/store unit).
pub mod units;

use crate::common::reg::RegisterFile;
use crate::config::CoreKind;
use crate::soc::DataMemory;
use crate::stats::SimStats;

pub use self::pipeline::engine::FiveStageCore;
pub use self::single_stage::SingleStageCore;

/// Result of asking a core to advance one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A cycle was executed and committed.
    Committed,
    /// The core has halted; nothing was executed.
    Halted,
}

/// Interface shared by the simulated cores.
pub trait Core {
    /// Which model this is.
    fn kind(&self) -> CoreKind;

    /// Advances the core by one clock cycle.
    fn step(&mut self) -> CycleOutcome;

    /// Returns `true` once the core has stopped.
    fn is_halted(&self) -> bool;

    /// Performance counters.
    fn stats(&self) -> &SimStats;

    /// Architectural register file.
    fn regs(&self) -> &RegisterFile;

    /// Data memory.
    fn dmem(&self) -> &DataMemory;

    /// Lines of the per-cycle state dump for the committed state.
    fn dump_state(&self) -> Vec<String>;
}

/// Type-erased core for storage in the non-generic simulator.
#[derive(Clone, Debug)]
pub enum AnyCore {
    /// Single-stage reference core.
    Single(Box<SingleStageCore>),
    /// Five-stage pipelined core.
    Five(Box<FiveStageCore>),
}

impl AnyCore {
    fn inner(&self) -> &dyn Core {
        match self {
            Self::Single(c) => c.as_ref(),
            Self::Five(c) => c.as_ref(),
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Core {
        match self {
            Self::Single(c) => c.as_mut(),
            Self::Five(c) => c.as_mut(),
        }
    }
}

impl Core for AnyCore {
    fn kind(&self) -> CoreKind {
        self.inner().kind()
    }

    fn step(&mut self) -> CycleOutcome {
        self.inner_mut().step()
    }

    fn is_halted(&self) -> bool {
        self.inner().is_halted()
    }

    fn stats(&self) -> &SimStats {
        self.inner().stats()
    }

    fn regs(&self) -> &RegisterFile {
        self.inner().regs()
    }

    fn dmem(&self) -> &DataMemory {
        self.inner().dmem()
    }

    fn dump_state(&self) -> Vec<String> {
        self.inner().dump_state()
    }
}
