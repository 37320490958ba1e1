//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Default memory size and word geometry.
//! 2. **Instruction Constants:** Instruction width and the halt sentinel.
//! 3. **Register Constants:** Register count and bit width.

/// Default size of each memory (instruction and data) in bytes.
pub const MEM_SIZE: usize = 1000;

/// Number of bytes in a machine word.
pub const WORD_BYTES: usize = 4;

/// Size of an instruction in bytes; the fetch PC advances by this amount.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Reserved instruction word that terminates the program.
pub const HALT_INSTRUCTION: u32 = 0xFFFF_FFFF;

/// Number of architectural integer registers.
pub const REG_COUNT: usize = 32;

/// Width of a register value in bits (used by binary dumps).
pub const XLEN: usize = 32;

/// Width of a memory byte cell in bits (used by seed files and dumps).
pub const BYTE_BITS: usize = 8;

/// Upper bound on simulated cycles before a run is abandoned.
pub const DEFAULT_MAX_CYCLES: u64 = 1_000_000;
