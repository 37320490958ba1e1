//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Every stage reads only the committed `current` state and
//! writes only the `next` state. It includes:
//! 1. **Fetch:** Retrieves instructions from memory based on the PC and detects the halt sentinel.
//! 2. **Decode:** Checks for data hazards, decodes instructions, and generates control signals.
//! 3. **Execute:** Reads operands, performs ALU operations, and resolves branches and jumps.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Commits results to the register file and counts retired instructions.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;

/// Decision made by the decode stage that constrains fetch in the same cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeAction {
    /// Decode advanced normally (or held a bubble).
    #[default]
    Advance,
    /// A data hazard froze decode; fetch must hold its PC.
    Stall,
    /// The decode instruction was on the wrong path and has been discarded.
    Squash,
}
