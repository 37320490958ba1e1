//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction, decoding,
//! and disassembly for the supported RV32I subset: ADD, SUB, XOR, OR, AND, their
//! immediate forms, LW, SW, BEQ, BNE, and JAL.

/// Instruction decoding logic producing sign-extended immediates.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (opcodes and function codes).
pub mod rv32i;
