//! RISC-V Instruction Decoder.
//!
//! This module decodes 32-bit instruction words into a structured `Decoded`
//! field set. Field extraction is driven by the major opcode: only the fields
//! meaningful for that opcode's format are populated, the rest stay zero.
//! Immediates are reassembled from their scattered bit ranges and
//! sign-extended with [`sign_extend`].

use crate::isa::instruction::{Decoded, Format, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// An inclusive `(high, low)` range of instruction bits.
type BitRange = (u32, u32);

/// I-type `imm[11:0]`.
const I_IMM: BitRange = (31, 20);
/// S-type `imm[11:5]` and `imm[4:0]`.
const S_IMM_HI: BitRange = (31, 25);
const S_IMM_LO: BitRange = (11, 7);
/// B-type `imm[12]`, `imm[11]`, `imm[10:5]`, `imm[4:1]`.
const B_IMM_12: BitRange = (31, 31);
const B_IMM_11: BitRange = (7, 7);
const B_IMM_10_5: BitRange = (30, 25);
const B_IMM_4_1: BitRange = (11, 8);
/// J-type `imm[20]`, `imm[19:12]`, `imm[11]`, `imm[10:1]`.
const J_IMM_20: BitRange = (31, 31);
const J_IMM_19_12: BitRange = (19, 12);
const J_IMM_11: BitRange = (20, 20);
const J_IMM_10_1: BitRange = (30, 21);

/// Immediate widths before sign extension.
const I_IMM_BITS: u32 = 12;
const S_IMM_BITS: u32 = 12;
const B_IMM_BITS: u32 = 13;
const J_IMM_BITS: u32 = 21;

/// Extracts the bits of `range` from `inst`, right-aligned.
const fn field(inst: u32, (hi, lo): BitRange) -> u32 {
    (inst >> lo) & ((1 << (hi - lo + 1)) - 1)
}

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure. Fields not used by the opcode's format are zero;
/// an opcode outside the supported subset yields [`Format::Unknown`] with
/// only `raw` and `opcode` set.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let base = Decoded {
        raw: inst,
        opcode,
        ..Decoded::default()
    };

    match opcode {
        opcodes::OP_REG => Decoded {
            format: Format::R,
            rd: inst.rd(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct3: inst.funct3(),
            funct7: inst.funct7(),
            ..base
        },
        opcodes::OP_IMM | opcodes::OP_LOAD => Decoded {
            format: Format::I,
            rd: inst.rd(),
            rs1: inst.rs1(),
            funct3: inst.funct3(),
            imm_i: decode_i_type_imm(inst),
            ..base
        },
        opcodes::OP_STORE => Decoded {
            format: Format::S,
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct3: inst.funct3(),
            imm_s: decode_s_type_imm(inst),
            ..base
        },
        opcodes::OP_BRANCH => Decoded {
            format: Format::B,
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct3: inst.funct3(),
            imm_b: decode_b_type_imm(inst),
            ..base
        },
        opcodes::OP_JAL => Decoded {
            format: Format::J,
            rd: inst.rd(),
            imm_j: decode_j_type_imm(inst),
            ..base
        },
        _ => base,
    }
}

/// I-type immediate.
const fn decode_i_type_imm(inst: u32) -> i32 {
    sign_extend(field(inst, I_IMM), I_IMM_BITS)
}

/// S-type immediate; the low five bits sit where `rd` would be.
const fn decode_s_type_imm(inst: u32) -> i32 {
    let imm = (field(inst, S_IMM_HI) << 5) | field(inst, S_IMM_LO);
    sign_extend(imm, S_IMM_BITS)
}

/// B-type immediate. Bit 0 is implicitly zero.
const fn decode_b_type_imm(inst: u32) -> i32 {
    let imm = (field(inst, B_IMM_12) << 12)
        | (field(inst, B_IMM_11) << 11)
        | (field(inst, B_IMM_10_5) << 5)
        | (field(inst, B_IMM_4_1) << 1);
    sign_extend(imm, B_IMM_BITS)
}

/// J-type immediate. Bit 0 is implicitly zero.
const fn decode_j_type_imm(inst: u32) -> i32 {
    let imm = (field(inst, J_IMM_20) << 20)
        | (field(inst, J_IMM_19_12) << 12)
        | (field(inst, J_IMM_11) << 11)
        | (field(inst, J_IMM_10_1) << 1);
    sign_extend(imm, J_IMM_BITS)
}

/// Sign extends the low `bits` bits of `val` to a 32-bit signed integer.
///
/// If bit `bits - 1` is set, every higher bit of the result is one. Bits of
/// `val` above the field are ignored. `bits` is clamped to `1..=32`.
///
/// # Examples
///
/// ```
/// use rv5s_core::isa::decode::sign_extend;
///
/// assert_eq!(sign_extend(0xFFF, 12), -1);
/// assert_eq!(sign_extend(0x7FF, 12), 2047);
/// ```
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let width = if bits == 0 {
        1
    } else if bits > INSTRUCTION_WIDTH {
        INSTRUCTION_WIDTH
    } else {
        bits
    };
    let shift = INSTRUCTION_WIDTH - width;
    ((val << shift) as i32) >> shift
}
