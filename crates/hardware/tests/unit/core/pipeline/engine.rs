//! Five-Stage Engine Tests.
//!
//! End-to-end programs run on the pipelined core: the reference scenarios,
//! control-flow squashing, halt and drain, and the recoverable failure paths.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{TestContext, step_cycles};
use pretty_assertions::assert_eq;
use rv5s_core::common::HALT_INSTRUCTION;
use rv5s_core::core::{Core, CycleOutcome};

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

// ══════════════════════════════════════════════════════════
// Reference scenarios
// ══════════════════════════════════════════════════════════

#[test]
fn addi_then_halt() {
    let core = TestContext::new()
        .with_program(&[b().addi(1, 0, 5).build()])
        .run_five();

    assert_eq!(core.regs.read(1), 5);
    assert_eq!(core.stats.instructions_retired, 1);
    assert_eq!(core.stats.cycles, 5);
    assert!(core.halted);
    assert!(core.halt_fetched);
}

#[test]
fn store_then_load_round_trips() {
    let core = TestContext::new()
        .with_program(&[
            b().addi(1, 0, 16).build(),
            b().addi(2, 0, 42).build(),
            b().sw(2, 1, 0).build(),
            b().lw(3, 1, 0).build(),
        ])
        .run_five();

    assert_eq!(core.regs.read(3), 42);
    assert_eq!(core.dmem.read_data(16), 42);
    assert_eq!(&core.dmem.bytes()[16..20], &[0, 0, 0, 42]);
    assert_eq!(core.stats.instructions_retired, 4);
}

#[test]
fn taken_branch_redirects_fetch_to_target() {
    let mut core = TestContext::new()
        .with_program(&[
            b().beq(0, 0, 8).build(),
            b().addi(1, 0, 1).build(),
            b().addi(2, 0, 2).build(),
        ])
        .five_stage();

    step_cycles(&mut core, 3);
    assert_eq!(core.current.if_stage.pc, 8, "fetch resumes at PC+8");
    assert!(core.current.id.nop, "no instruction fetched in the redirect cycle");
    assert!(core.current.ex.nop, "wrong-path instruction squashed");

    core.run();
    assert_eq!(core.regs.read(1), 0, "skipped instruction never executes");
    assert_eq!(core.regs.read(2), 2);
    assert_eq!(core.stats.instructions_retired, 2);
    assert_eq!(core.stats.branches_taken, 1);
    assert_eq!(core.stats.flushes_control, 1);
}

#[test]
fn dependent_add_stalls() {
    let core = TestContext::new()
        .with_program(&[b().add(2, 0, 1).build(), b().add(3, 2, 2).build()])
        .run_five();

    assert_eq!(core.stats.stalls_data, 1);
    assert_eq!(core.stats.instructions_retired, 2);
    assert_eq!(core.stats.cycles, 7);
}

#[test]
fn load_use_stalls_until_value_is_written_back() {
    let core = TestContext::new()
        .with_program(&[
            b().lw(1, 0, 0).build(),
            b().sw(1, 0, 4).build(),
            b().lw(2, 0, 4).build(),
            b().add(3, 2, 1).build(),
        ])
        .with_data_word(0, 7)
        .run_five();

    assert_eq!(core.regs.read(1), 7);
    assert_eq!(core.regs.read(2), 7);
    assert_eq!(core.regs.read(3), 14);
    assert_eq!(core.dmem.read_data(4), 7);
    assert_eq!(core.stats.stalls_data, 2);
    assert_eq!(core.stats.instructions_retired, 4);
    assert_eq!(core.stats.cycles, 10);
}

// ══════════════════════════════════════════════════════════
// Control flow
// ══════════════════════════════════════════════════════════

#[test]
fn untaken_branch_does_not_flush() {
    let core = TestContext::new()
        .with_program(&[
            b().addi(1, 0, 1).build(),
            b().addi(9, 0, 0).build(),
            b().beq(1, 0, 8).build(),
            b().addi(2, 0, 2).build(),
        ])
        .run_five();

    assert_eq!(core.regs.read(2), 2);
    assert_eq!(core.stats.flushes_control, 0);
    assert_eq!(core.stats.branches_taken, 0);
}

#[test]
fn bne_loop_counts_down() {
    // x1 = 3; loop: x1 -= 1; x2 += 1; bne x1, x0, loop
    let core = TestContext::new()
        .with_program(&[
            b().addi(1, 0, 3).build(),
            b().addi(1, 1, -1).build(),
            b().addi(2, 2, 1).build(),
            b().bne(1, 0, -8).build(),
        ])
        .run_five();

    assert_eq!(core.regs.read(1), 0);
    assert_eq!(core.regs.read(2), 3);
    assert_eq!(core.stats.branches_taken, 2);
    assert_eq!(core.stats.instructions_retired, 1 + 3 * 3);
}

#[test]
fn jal_links_and_skips() {
    let core = TestContext::new()
        .with_program(&[
            b().jal(1, 8).build(),
            b().addi(5, 0, 99).build(),
            b().addi(2, 1, 0).build(),
        ])
        .run_five();

    assert_eq!(core.regs.read(1), 4, "link register holds PC+4");
    assert_eq!(core.regs.read(5), 0);
    assert_eq!(core.regs.read(2), 4);
    assert_eq!(core.stats.flushes_control, 1);
}

#[test]
fn halt_in_branch_shadow_is_discarded() {
    let core = TestContext::new()
        .with_program(&[
            b().beq(0, 0, 8).build(),
            HALT_INSTRUCTION,
            b().addi(2, 0, 2).build(),
        ])
        .run_five();

    assert_eq!(core.regs.read(2), 2);
    assert_eq!(core.stats.instructions_retired, 2);
}

// ══════════════════════════════════════════════════════════
// Halt and drain
// ══════════════════════════════════════════════════════════

#[test]
fn drained_core_stays_halted() {
    let mut core = TestContext::new()
        .with_program(&[b().addi(1, 0, 1).build(), b().addi(2, 0, 2).build()])
        .five_stage();
    core.run();

    let retired = core.stats.instructions_retired;
    let cycles = core.stats.cycles;
    assert!(core.current.is_drained());
    for _ in 0..5 {
        assert_eq!(core.tick(), CycleOutcome::Halted);
    }
    assert_eq!(core.stats.instructions_retired, retired);
    assert_eq!(core.stats.cycles, cycles);
}

#[test]
fn older_instructions_complete_after_halt_fetch() {
    let mut core = TestContext::new()
        .with_program(&[b().addi(1, 0, 1).build(), b().addi(2, 0, 2).build()])
        .five_stage();

    step_cycles(&mut core, 3);
    assert!(core.halt_fetched);
    assert_eq!(core.stats.instructions_retired, 0);

    core.run();
    assert_eq!(core.regs.read(1), 1);
    assert_eq!(core.regs.read(2), 2);
}

#[test]
fn empty_program_halts_immediately() {
    let core = TestContext::new().with_program(&[]).run_five();
    assert_eq!(core.stats.instructions_retired, 0);
    assert_eq!(core.stats.cycles, 1);
}

#[test]
fn cycle_budget_stops_runaway_program() {
    let core = TestContext::new()
        .with_program(&[b().jal(0, 0).build()])
        .with_max_cycles(50)
        .run_five();

    assert!(core.is_halted());
    assert_eq!(core.stats.cycles, 50);
}

// ══════════════════════════════════════════════════════════
// Recoverable failures
// ══════════════════════════════════════════════════════════

#[test]
fn unsupported_instruction_becomes_bubble() {
    let core = TestContext::new()
        .with_program(&[0x0000_0037, b().addi(1, 0, 3).build()])
        .run_five();

    assert_eq!(core.stats.unsupported, 1);
    assert_eq!(core.stats.instructions_retired, 1);
    assert_eq!(core.regs.read(1), 3);
}

#[test]
fn out_of_range_load_reads_zero() {
    let core = TestContext::new()
        .with_program(&[b().addi(1, 0, 9).build(), b().lw(1, 0, 2000).build()])
        .run_five();

    assert_eq!(core.regs.read(1), 0);
    assert_eq!(core.stats.instructions_retired, 2);
}

#[test]
fn out_of_range_store_is_dropped() {
    let core = TestContext::new()
        .with_program(&[b().addi(2, 0, 1).build(), b().sw(2, 0, 998).build()])
        .run_five();

    assert!(core.dmem.bytes().iter().all(|&b| b == 0));
}

#[test]
fn writes_to_x0_are_ignored() {
    let core = TestContext::new()
        .with_program(&[b().addi(0, 0, 5).build(), b().add(1, 0, 0).build()])
        .traced()
        .run_five();

    assert_eq!(core.regs.read(0), 0);
    assert_eq!(core.regs.read(1), 0);
    assert_eq!(core.stats.stalls_data, 0, "x0 never creates a hazard");
}

#[test]
fn program_without_halt_drains_at_end_of_memory() {
    // Zero words decode as bubbles until the PC reaches 1000, where fetch parks.
    let core = TestContext::new()
        .with_program(&[b().addi(1, 0, 5).build()])
        .without_halt()
        .with_max_cycles(1_000_000)
        .run_five();

    assert!(core.is_halted());
    assert!(core.halt_fetched);
    assert!(core.current.if_stage.nop);
    assert_eq!(core.current.if_stage.pc, 1000);
    assert_eq!(core.regs.read(1), 5);
    assert_eq!(core.stats.instructions_retired, 1);
    assert_eq!(core.stats.unsupported, 249);
    assert_eq!(core.stats.cycles, 251);
}

#[test]
fn jump_past_end_of_memory_parks_fetch() {
    let core = TestContext::new()
        .with_program(&[b().jal(0, 1000).build()])
        .with_max_cycles(100)
        .run_five();

    assert!(core.halt_fetched);
    assert_eq!(core.current.if_stage.pc, 1000);
    assert!(core.stats.cycles < 100);
    assert_eq!(core.stats.unsupported, 0);
}
