//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! Operands are raw 32-bit register patterns viewed as signed integers;
//! results are returned as raw patterns. Overflow wraps silently.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Xor, Or, And

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (xor, or, and).
pub mod logic;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs1` value)
    /// * `b`  - Second operand (`rs2` value or sign-extended immediate)
    ///
    /// # Returns
    ///
    /// The 32-bit result of the ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv5s_core::core::units::alu::Alu;
    /// use rv5s_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    ///
    /// // Signed overflow wraps.
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX as u32, 1), i32::MIN as u32);
    ///
    /// // -1 - 1
    /// assert_eq!(Alu::execute(AluOp::Sub, u32::MAX, 1), (-2_i32) as u32);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Xor | AluOp::Or | AluOp::And => logic::execute(op, a, b),
        }
    }
}
