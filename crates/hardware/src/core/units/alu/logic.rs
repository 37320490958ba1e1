//! ALU logical operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise logical operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Xor => a ^ b,
        AluOp::Or => a | b,
        AluOp::And => a & b,
        _ => 0,
    }
}
