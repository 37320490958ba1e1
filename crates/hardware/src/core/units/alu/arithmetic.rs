//! ALU arithmetic operations.
//!
//! Implements 32-bit signed addition and subtraction with two's-complement
//! wraparound; there is no overflow signal.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => (a as i32).wrapping_add(b as i32) as u32,
        AluOp::Sub => (a as i32).wrapping_sub(b as i32) as u32,
        _ => 0,
    }
}
