//! Data Hazard Detection.
//!
//! The pipeline has no forwarding network. Operands are read from the register
//! file in the Execute stage, after the same cycle's writeback has committed,
//! so the only unresolvable read-after-write case is a producer that is one
//! stage ahead: the instruction in EX writing a register that the instruction
//! in ID reads. That case stalls ID and IF and inserts a bubble into EX.
//!
//! The check is recomputed every cycle; no hazard state is latched.

use crate::core::pipeline::latches::ExEntry;
use crate::isa::instruction::Decoded;

/// Checks if the instruction in decode must stall behind the one in execute.
///
/// A hazard exists when the EX instruction is live, will write a nonzero
/// destination register, and that register is one of the ID instruction's
/// sources. Source fields that the ID instruction's format does not use are
/// zero after decode and so never match.
///
/// # Arguments
///
/// * `ex` - The execute-stage entry of the committed state.
/// * `id` - The decoded fields of the instruction in decode.
///
/// # Returns
///
/// `true` if a one-cycle stall is required, `false` otherwise.
///
/// # Examples
///
/// ```
/// use rv5s_core::core::pipeline::hazards::need_stall_raw;
/// use rv5s_core::core::pipeline::latches::ExEntry;
/// use rv5s_core::core::pipeline::signals::ControlSignals;
/// use rv5s_core::isa::decode::decode;
///
/// // EX: add x2, x0, x1    ID: add x3, x2, x2
/// let ex = ExEntry {
///     rd: 2,
///     ctrl: ControlSignals { write_enable: true, ..Default::default() },
///     ..Default::default()
/// };
/// assert!(need_stall_raw(&ex, &decode(0x002101B3)));
/// ```
pub const fn need_stall_raw(ex: &ExEntry, id: &Decoded) -> bool {
    !ex.nop && ex.ctrl.write_enable && ex.rd != 0 && (ex.rd == id.rs1 || ex.rd == id.rs2)
}
