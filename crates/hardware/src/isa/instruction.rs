//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the `Decoded` field set for
//! RISC-V instruction fields in a 32-bit instruction word.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Bit position of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Extraction is unconditional: every field is read from its fixed bit position
/// regardless of the instruction format. Format-aware decoding lives in
/// [`crate::isa::decode::decode`].
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Bit 5 of this field distinguishes ADD from SUB.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Instruction format, selected by the major opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Register-register arithmetic (`OP`).
    R,
    /// Immediate arithmetic and loads (`OP-IMM`, `LOAD`).
    I,
    /// Stores (`STORE`).
    S,
    /// Conditional branches (`BRANCH`).
    B,
    /// Unconditional jumps (`JAL`).
    J,
    /// Opcode outside the supported subset.
    #[default]
    Unknown,
}

/// Decoded instruction fields.
///
/// Only the fields meaningful for [`Decoded::format`] are populated; every other
/// field is zero. All immediates are sign-extended to 32 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Format implied by the opcode.
    pub format: Format,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// I-type immediate (12 bits, sign-extended).
    pub imm_i: i32,
    /// S-type immediate (12 bits, sign-extended).
    pub imm_s: i32,
    /// B-type immediate (13 bits, sign-extended, always even).
    pub imm_b: i32,
    /// J-type immediate (21 bits, sign-extended, always even).
    pub imm_j: i32,
}
