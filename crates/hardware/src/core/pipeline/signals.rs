//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It provides:
//! 1. **Operation Classification:** The ALU operation and branch condition to apply.
//! 2. **Operand Selection:** Whether ALU operand B is the immediate or `rs2`.
//! 3. **Memory Control:** Load and store enables.
//! 4. **Write-back Control:** Whether the destination register is written.
//!
//! Signals are produced once, in decode, and travel unchanged to later stages.

/// ALU operation types for the supported integer instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (also used for address generation).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise XOR.
    Xor,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

/// Condition under which a branch is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchCond {
    /// Not a branch.
    #[default]
    None,

    /// Taken when `rs1 == rs2` (`BEQ`).
    Eq,

    /// Taken when `rs1 != rs2` (`BNE`).
    Ne,
}

/// Control signals generated during instruction decode.
///
/// These signals flow through the pipeline to control execute, memory,
/// and writeback behavior. They are never recomputed downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub write_enable: bool,
    /// Enable memory read operation (load).
    pub read_mem: bool,
    /// Enable memory write operation (store).
    pub write_mem: bool,
    /// ALU operand B is the I-type immediate instead of `rs2`.
    pub is_immediate: bool,
    /// Branch condition (`BranchCond::None` for non-branches).
    pub branch: BranchCond,
    /// Instruction is an unconditional jump (`JAL`).
    pub jump: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
}
