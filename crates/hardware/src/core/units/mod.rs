//! Execution units and functional components.
//!
//! This module contains the pure functional units used by the Execute stage
//! of both cores: the integer ALU, the load/store address unit, and the
//! branch resolution unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional branches and jumps.
pub mod bru;

/// Load/Store Unit for effective address generation.
pub mod lsu;
