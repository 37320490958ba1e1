//! Single-stage reference core.
//!
//! Executes one whole instruction per cycle: fetch, decode, execute, memory
//! access and writeback all happen inside a single `step`. There are no
//! hazards and no latches; the only state carried between cycles is the fetch
//! PC and its `nop` flag.
//!
//! The core halts when it fetches the halt sentinel, an all-zero word, or when
//! the PC no longer addresses a full word of instruction memory. The halting
//! cycle counts as an instruction and is followed by one confirmation cycle.

use tracing::{debug, info, warn};

use crate::common::constants::{HALT_INSTRUCTION, INSTRUCTION_SIZE, WORD_BYTES};
use crate::common::reg::RegisterFile;
use crate::config::{Config, CoreKind};
use crate::core::pipeline::latches::IfEntry;
use crate::core::pipeline::signals::BranchCond;
use crate::core::pipeline::stages::decode::{control_signals, format_immediate};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::core::{Core, CycleOutcome};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::sim::trace::STATE_RULE;
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Lifecycle of the single-stage core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Running,
    /// Halt fetched; one confirmation cycle remains.
    Confirming,
    Halted,
}

/// Non-pipelined core executing one instruction per cycle.
#[derive(Clone, Debug)]
pub struct SingleStageCore {
    /// Integer register file.
    pub regs: RegisterFile,
    /// Instruction memory.
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,
    /// Fetch state: PC of the next instruction and the halted flag.
    pub fetch: IfEntry,
    /// Performance counters.
    pub stats: SimStats,
    /// Emit a `debug` event per executed instruction.
    pub trace: bool,
    phase: Phase,
    max_cycles: u64,
}

impl SingleStageCore {
    /// Creates a core with the PC at 0.
    pub fn new(imem: InstructionMemory, dmem: DataMemory, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            imem,
            dmem,
            fetch: IfEntry { pc: 0, nop: false },
            stats: SimStats::default(),
            trace: config.general.trace_enabled(),
            phase: Phase::Running,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Executes one cycle.
    pub fn tick(&mut self) -> CycleOutcome {
        match self.phase {
            Phase::Halted => return CycleOutcome::Halted,
            Phase::Confirming => {
                self.phase = Phase::Halted;
                self.stats.cycles += 1;
                info!(
                    target: "rv5s::single",
                    cycles = self.stats.cycles,
                    instructions = self.stats.instructions_retired,
                    "single-stage core halted"
                );
                return CycleOutcome::Committed;
            }
            Phase::Running => {}
        }

        if self.stats.cycles >= self.max_cycles {
            self.phase = Phase::Halted;
            warn!(
                target: "rv5s::single",
                max_cycles = self.max_cycles,
                "cycle budget exhausted before the halt instruction"
            );
            return CycleOutcome::Halted;
        }

        let pc = self.fetch.pc;
        let in_range = (pc as usize).saturating_add(WORD_BYTES) <= self.imem.size();
        let inst = if in_range { self.imem.read_instr(pc) } else { 0 };

        if inst == HALT_INSTRUCTION || inst == 0 {
            self.fetch.nop = true;
            self.stats.instructions_retired += 1;
            self.stats.cycles += 1;
            self.phase = Phase::Confirming;
            if self.trace {
                debug!(target: "rv5s::single", "pc={pc:#06x} halt");
            }
            return CycleOutcome::Committed;
        }

        self.fetch.pc = self.execute(pc, inst);
        self.stats.cycles += 1;
        CycleOutcome::Committed
    }

    /// Runs cycles until the core halts.
    pub fn run(&mut self) {
        while self.tick() == CycleOutcome::Committed {}
    }

    /// Executes `inst` at `pc` to completion and returns the next PC.
    fn execute(&mut self, pc: u32, inst: u32) -> u32 {
        let fallthrough = pc.wrapping_add(INSTRUCTION_SIZE);
        let d = decode(inst);
        let ctrl = match control_signals(&d) {
            Ok(ctrl) => ctrl,
            Err(e) => {
                warn!(target: "rv5s::single", pc, "{e}; skipping");
                self.stats.unsupported += 1;
                return fallthrough;
            }
        };

        let imm = format_immediate(&d);
        let rv1 = self.regs.read(d.rs1);
        let rv2 = self.regs.read(d.rs2);
        let mut next_pc = fallthrough;

        let result = if ctrl.jump {
            let j = Bru::jump(pc, imm);
            next_pc = j.target;
            Some(j.link)
        } else if ctrl.branch != BranchCond::None {
            let b = Bru::resolve(ctrl.branch, pc, rv1, rv2, imm);
            if b.taken {
                self.stats.branches_taken += 1;
            }
            next_pc = b.target;
            None
        } else if ctrl.read_mem {
            Some(self.dmem.read_data(Lsu::load_address(rv1, imm)))
        } else if ctrl.write_mem {
            let s = Lsu::store_access(rv1, rv2, imm);
            self.dmem.write_data(s.addr, s.data);
            None
        } else {
            let b = if ctrl.is_immediate { imm as u32 } else { rv2 };
            Some(Alu::execute(ctrl.alu, rv1, b))
        };

        if let Some(value) = result
            && ctrl.write_enable
        {
            self.regs.write(d.rd, value);
        }
        self.stats.instructions_retired += 1;

        if self.trace {
            debug!(
                target: "rv5s::single",
                "pc={:#06x} {:<24} next={:#06x}",
                pc,
                disassemble(inst),
                next_pc
            );
        }
        next_pc
    }
}

impl Core for SingleStageCore {
    fn kind(&self) -> CoreKind {
        CoreKind::Single
    }

    fn step(&mut self) -> CycleOutcome {
        self.tick()
    }

    fn is_halted(&self) -> bool {
        self.phase == Phase::Halted
    }

    fn stats(&self) -> &SimStats {
        &self.stats
    }

    fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    fn dmem(&self) -> &DataMemory {
        &self.dmem
    }

    fn dump_state(&self) -> Vec<String> {
        vec![
            format!("IF.PC: {}", self.fetch.pc),
            format!("IF.nop: {}", if self.fetch.nop { "True" } else { "False" }),
            STATE_RULE.to_owned(),
        ]
    }
}
