//! Instruction Decode Properties.
//!
//! Verifies that `decode()` extracts opcode, register fields, function codes,
//! and sign-extended immediates for every supported format, and that fields a
//! format does not use come back as zero.
//!
//! # Coverage Matrix
//!
//! - R-type: OP_REG
//! - I-type: OP_IMM, OP_LOAD
//! - S-type: OP_STORE
//! - B-type: OP_BRANCH
//! - J-type: OP_JAL

use crate::common::builder::instruction::InstructionBuilder;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rv5s_core::isa::decode::{decode, sign_extend};
use rv5s_core::isa::instruction::{Format, InstructionBits};
use rv5s_core::isa::rv32i::opcodes::*;

// ──────────────────────────────────────────────────────────
// Fixed vectors
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0x0050_0093, OP_IMM, Format::I)] // addi x1, x0, 5
#[case(0x0021_01B3, OP_REG, Format::R)] // add x3, x2, x2
#[case(0x0000_A183, OP_LOAD, Format::I)] // lw x3, 0(x1)
#[case(0x0020_A023, OP_STORE, Format::S)] // sw x2, 0(x1)
#[case(0x0000_0463, OP_BRANCH, Format::B)] // beq x0, x0, 8
#[case(0x0080_00EF, OP_JAL, Format::J)] // jal x1, 8
#[case(0xFFFF_FFFF, 0x7F, Format::Unknown)] // halt sentinel
fn opcode_selects_format(#[case] inst: u32, #[case] opcode: u32, #[case] format: Format) {
    let d = decode(inst);
    assert_eq!(d.opcode, opcode);
    assert_eq!(d.format, format);
    assert_eq!(d.raw, inst);
}

#[test]
fn beq_offset_eight() {
    assert_eq!(decode(0x0000_0463).imm_b, 8);
}

#[test]
fn unknown_opcode_leaves_fields_zero() {
    let d = decode(0xFFFF_FFFF);
    assert_eq!((d.rd, d.rs1, d.rs2), (0, 0, 0));
    assert_eq!((d.imm_i, d.imm_s, d.imm_b, d.imm_j), (0, 0, 0, 0));
}

#[test]
fn jal_has_no_source_registers() {
    let d = decode(InstructionBuilder::new().jal(5, -16).build());
    assert_eq!((d.rs1, d.rs2), (0, 0));
    assert_eq!(d.rd, 5);
    assert_eq!(d.imm_j, -16);
}

#[test]
fn store_has_no_destination() {
    let d = decode(InstructionBuilder::new().sw(7, 8, 12).build());
    assert_eq!(d.rd, 0);
}

#[rstest]
#[case(0x800, 12, -2048)]
#[case(0x7FF, 12, 2047)]
#[case(0x1000, 13, -4096)]
#[case(0x10_0000, 21, -1_048_576)]
#[case(0xFFFF_F001, 12, 1)]
#[case(1, 1, -1)]
#[case(5, 0, -1)]
#[case(0x8000_0000, 40, i32::MIN)]
fn sign_extend_vectors(#[case] val: u32, #[case] bits: u32, #[case] expected: i32) {
    assert_eq!(sign_extend(val, bits), expected);
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn decode_is_deterministic(inst in any::<u32>()) {
        prop_assert_eq!(decode(inst), decode(inst));
    }

    #[test]
    fn register_fields_match_bit_extractors(rd in 0u32..32, rs1 in 0u32..32, rs2 in 0u32..32) {
        let inst = InstructionBuilder::new().add(rd, rs1, rs2).build();
        let d = decode(inst);
        prop_assert_eq!(d.rd, inst.rd());
        prop_assert_eq!(d.rs1, inst.rs1());
        prop_assert_eq!(d.rs2, inst.rs2());
        prop_assert_eq!(d.rd, rd as usize);
    }

    #[test]
    fn i_immediate_round_trips(imm in -2048i32..2048) {
        let d = decode(InstructionBuilder::new().addi(1, 2, imm).build());
        prop_assert_eq!(d.imm_i, imm);
        prop_assert_eq!(d.rs2, 0);
    }

    #[test]
    fn s_immediate_round_trips(imm in -2048i32..2048) {
        let d = decode(InstructionBuilder::new().sw(3, 4, imm).build());
        prop_assert_eq!(d.imm_s, imm);
    }

    #[test]
    fn b_immediate_round_trips(half in -2048i32..2048) {
        let imm = half * 2;
        let d = decode(InstructionBuilder::new().bne(1, 2, imm).build());
        prop_assert_eq!(d.imm_b, imm);
    }

    #[test]
    fn j_immediate_round_trips(half in -524_288i32..524_288) {
        let imm = half * 2;
        let d = decode(InstructionBuilder::new().jal(1, imm).build());
        prop_assert_eq!(d.imm_j, imm);
    }

    #[test]
    fn sign_extend_preserves_low_bits(val in any::<u32>(), bits in 1u32..=32) {
        let mask = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
        prop_assert_eq!(sign_extend(val, bits) as u32 & mask, val & mask);
    }
}
