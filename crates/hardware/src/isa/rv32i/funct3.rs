//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g., BEQ vs BNE, ADD vs XOR).

/// Load Word.
pub const LW: u32 = 0b010;

/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;

/// Add / Subtract (and ADDI).
pub const ADD_SUB: u32 = 0b000;
/// Exclusive OR (and XORI).
pub const XOR: u32 = 0b100;
/// Bitwise OR (and ORI).
pub const OR: u32 = 0b110;
/// Bitwise AND (and ANDI).
pub const AND: u32 = 0b111;
