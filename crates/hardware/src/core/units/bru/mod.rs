//! Branch Resolution Unit (BRU).
//!
//! Resolves conditional branches (`BEQ`, `BNE`) and unconditional jumps
//! (`JAL`) in the Execute stage. There is no prediction: the fetch stream is
//! redirected only after resolution.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::signals::BranchCond;

/// Outcome of a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchOutcome {
    /// Whether the branch condition held.
    pub taken: bool,
    /// Next PC: `pc + imm_b` if taken, otherwise `pc + 4`.
    pub target: u32,
}

/// Outcome of an unconditional jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpOutcome {
    /// Return address written to `rd`: `pc + 4`.
    pub link: u32,
    /// Jump destination: `pc + imm_j`.
    pub target: u32,
}

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch condition on two register values.
    ///
    /// `BranchCond::None` is never taken.
    pub const fn condition(cond: BranchCond, rs1: u32, rs2: u32) -> bool {
        match cond {
            BranchCond::None => false,
            BranchCond::Eq => rs1 == rs2,
            BranchCond::Ne => rs1 != rs2,
        }
    }

    /// Resolves a conditional branch at `pc`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv5s_core::core::units::bru::Bru;
    /// use rv5s_core::core::pipeline::signals::BranchCond;
    ///
    /// let out = Bru::resolve(BranchCond::Eq, 0x10, 3, 3, 8);
    /// assert!(out.taken);
    /// assert_eq!(out.target, 0x18);
    /// ```
    pub const fn resolve(cond: BranchCond, pc: u32, rs1: u32, rs2: u32, imm_b: i32) -> BranchOutcome {
        let taken = Self::condition(cond, rs1, rs2);
        let target = if taken {
            pc.wrapping_add_signed(imm_b)
        } else {
            pc.wrapping_add(INSTRUCTION_SIZE)
        };
        BranchOutcome { taken, target }
    }

    /// Resolves a `JAL` at `pc`.
    pub const fn jump(pc: u32, imm_j: i32) -> JumpOutcome {
        JumpOutcome {
            link: pc.wrapping_add(INSTRUCTION_SIZE),
            target: pc.wrapping_add_signed(imm_j),
        }
    }
}
