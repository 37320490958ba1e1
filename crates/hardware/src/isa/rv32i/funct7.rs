//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions to
//! distinguish between operations that share the same `funct3` (ADD vs SUB).

/// Default operation (ADD, XOR, OR, AND).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB).
pub const SUB: u32 = 0b0100000;

/// The bit within `funct7` that selects the alternate operation.
pub const ALT_BIT: u32 = 0b0100000;
