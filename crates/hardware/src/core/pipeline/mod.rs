//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The pipelined core and its per-cycle driver.
//! 2. **Hazards:** Detection of read-after-write data hazards.
//! 3. **Latches:** Inter-stage entries and the two pipeline state sets.
//! 4. **Signals:** Control signals generated during instruction decoding.
//! 5. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 6. **Traits:** Common interface for pipeline latches.

/// Five-stage core and cycle driver.
pub mod engine;

/// Pipeline hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF, ID, EX, MEM, WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;
