//! System-on-Chip (SoC) Components.
//!
//! The simulated system has two separate byte-addressable memories (Harvard
//! layout): an instruction memory read by fetch and a data memory read and
//! written by the memory stage.

/// Instruction and data memories.
pub mod memory;

pub use memory::{DataMemory, InstructionMemory};
