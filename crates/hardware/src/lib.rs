//! Cycle-accurate RV32I pipeline simulator library.
//!
//! This crate simulates a subset of RV32I on two core models:
//! 1. **Core:** A five-stage pipeline (fetch, decode, execute, memory, writeback) with
//!    hazard stalls and no forwarding, plus a single-stage reference core.
//! 2. **Memory:** Byte-addressed instruction and data memories with big-endian word access.
//! 3. **ISA:** Decoding and disassembly for ADD/SUB/XOR/OR/AND, their immediate forms,
//!    LW/SW, BEQ/BNE, and JAL.
//! 4. **Simulation:** Seed loading, configuration, trace files, and statistics.

/// Common types and constants (register file, errors, sizes).
pub mod common;
/// Simulator configuration (defaults, core selection, memory sizes).
pub mod config;
/// Processor cores (five-stage pipeline, single-stage core, functional units).
pub mod core;
/// Instruction set (decode, instruction fields, disassembly, RV32I encodings).
pub mod isa;
/// Simulation driver, seed loader, and result-file writers.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Five-stage pipelined core.
pub use crate::core::FiveStageCore;
/// Single-stage reference core.
pub use crate::core::SingleStageCore;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
