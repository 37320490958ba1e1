//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entries carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One entry per stage holding that stage's in-flight instruction.
//! 2. **Bubbles:** Every entry carries a `nop` flag; a bubble has no architectural effect.
//! 3. **State Sets:** `PipelineState` groups all five entries into one snapshot.
//!
//! Bubbles are created with [`PipelineLatch::bubble`], which zeroes every field,
//! so a squashed or stalled slot never leaks stale values into the state dump.

use crate::core::pipeline::signals::{BranchCond, ControlSignals};
use crate::core::pipeline::traits::PipelineLatch;

/// Fetch stage entry: the PC of the next instruction to fetch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfEntry {
    /// Address of the next instruction to fetch.
    pub pc: u32,
    /// Fetch is idle (set after the halt sentinel is fetched).
    pub nop: bool,
}

/// Decode stage entry: a fetched, not yet decoded instruction.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub instr: u32,
    /// Slot holds a bubble.
    pub nop: bool,
}

/// Execute stage entry: a decoded instruction with its control signals.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub instr: u32,
    /// First source register index (rs1).
    pub rs1: usize,
    /// Second source register index (rs2).
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// Value of `rs1` as seen by decode. Execute re-reads the register file
    /// after writeback, so this is only reported in the state dump.
    pub read_data1: u32,
    /// Value of `rs2` as seen by decode.
    pub read_data2: u32,
    /// Sign-extended immediate for the instruction's format (0 for R-type).
    pub imm: i32,
    /// Control signals generated by decode.
    pub ctrl: ControlSignals,
    /// Slot holds a bubble.
    pub nop: bool,
}

/// Memory stage entry: an executed instruction awaiting memory access.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub instr: u32,
    /// ALU result, effective address, or JAL link value.
    pub alu_result: u32,
    /// Value to store (stores only).
    pub store_data: u32,
    /// First source register index (rs1).
    pub rs1: usize,
    /// Second source register index (rs2).
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// Control signals generated by decode.
    pub ctrl: ControlSignals,
    /// Slot holds a bubble.
    pub nop: bool,
}

/// Writeback stage entry: a result ready to commit to the register file.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct WbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub instr: u32,
    /// Value to write to `rd`.
    pub wrt_data: u32,
    /// First source register index (rs1).
    pub rs1: usize,
    /// Second source register index (rs2).
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// Write `wrt_data` to `rd` at commit.
    pub write_enable: bool,
    /// Slot holds a bubble.
    pub nop: bool,
}

macro_rules! impl_latch {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PipelineLatch for $ty {
                fn bubble() -> Self {
                    Self {
                        nop: true,
                        ..Self::default()
                    }
                }

                fn is_bubble(&self) -> bool {
                    self.nop
                }
            }
        )*
    };
}

impl_latch!(IfEntry, IdEntry, ExEntry, MemEntry, WbEntry);

/// A complete set of the five pipeline latches.
///
/// The engine keeps two: the committed `current` set read by every stage, and
/// the `next` set written during a cycle and committed at its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineState {
    /// Fetch stage.
    pub if_stage: IfEntry,
    /// Decode stage.
    pub id: IdEntry,
    /// Execute stage.
    pub ex: ExEntry,
    /// Memory stage.
    pub mem: MemEntry,
    /// Writeback stage.
    pub wb: WbEntry,
}

impl PipelineState {
    /// Reset state: fetch armed at `pc`, every other stage a bubble.
    pub fn reset(pc: u32) -> Self {
        Self {
            if_stage: IfEntry { pc, nop: false },
            id: IdEntry::bubble(),
            ex: ExEntry::bubble(),
            mem: MemEntry::bubble(),
            wb: WbEntry::bubble(),
        }
    }

    /// An all-bubble state with fetch parked at `pc`.
    pub fn drained(pc: u32) -> Self {
        Self {
            if_stage: IfEntry { pc, nop: true },
            ..Self::reset(pc)
        }
    }

    /// Returns `true` when every stage holds a bubble.
    pub const fn is_drained(&self) -> bool {
        self.if_stage.nop && self.id.nop && self.ex.nop && self.mem.nop && self.wb.nop
    }

    /// Renders every latch for the per-cycle state dump.
    ///
    /// Flags print as `True`/`False` (nop) or `0`/`1` (controls), data words
    /// as 32 binary digits, and register indices as 5 binary digits.
    /// `EX.alu_op` is the two-bit ALU class: `01` for a branch compare,
    /// `00` for everything else.
    pub fn dump_lines(&self) -> Vec<String> {
        let nop = |b: bool| if b { "True" } else { "False" };
        let bit = u8::from;
        let alu_op = |c: ControlSignals| if c.branch == BranchCond::None { "00" } else { "01" };
        let (f, d, e, m, w) = (self.if_stage, self.id, self.ex, self.mem, self.wb);
        vec![
            format!("IF.nop: {}", nop(f.nop)),
            format!("IF.PC: {}", f.pc),
            format!("ID.nop: {}", nop(d.nop)),
            format!("ID.Instr: {:032b}", d.instr),
            format!("EX.nop: {}", nop(e.nop)),
            format!("EX.Instr: {:032b}", e.instr),
            format!("EX.Read_data1: {:032b}", e.read_data1),
            format!("EX.Read_data2: {:032b}", e.read_data2),
            format!("EX.Imm: {:032b}", e.imm),
            format!("EX.Rs1: {:05b}", e.rs1),
            format!("EX.Rs2: {:05b}", e.rs2),
            format!("EX.Rd: {:05b}", e.rd),
            format!("EX.is_I_type: {}", bit(e.ctrl.is_immediate)),
            format!("EX.rd_mem: {}", bit(e.ctrl.read_mem)),
            format!("EX.wrt_mem: {}", bit(e.ctrl.write_mem)),
            format!("EX.alu_op: {}", alu_op(e.ctrl)),
            format!("EX.wrt_enable: {}", bit(e.ctrl.write_enable)),
            format!("MEM.nop: {}", nop(m.nop)),
            format!("MEM.ALUresult: {:032b}", m.alu_result),
            format!("MEM.Store_data: {:032b}", m.store_data),
            format!("MEM.Rs1: {:05b}", m.rs1),
            format!("MEM.Rs2: {:05b}", m.rs2),
            format!("MEM.Rd: {:05b}", m.rd),
            format!("MEM.rd_mem: {}", bit(m.ctrl.read_mem)),
            format!("MEM.wrt_mem: {}", bit(m.ctrl.write_mem)),
            format!("MEM.wrt_enable: {}", bit(m.ctrl.write_enable)),
            format!("WB.nop: {}", nop(w.nop)),
            format!("WB.Wrt_data: {:032b}", w.wrt_data),
            format!("WB.Rs1: {:05b}", w.rs1),
            format!("WB.Rs2: {:05b}", w.rs2),
            format!("WB.rd: {:05b}", w.rd),
            format!("WB.wrt_enable: {}", bit(w.write_enable)),
        ]
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::reset(0)
    }
}
