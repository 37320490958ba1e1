//! # Simulator Tests
//!
//! Runs both cores from seed files in a temporary directory and checks the
//! result files they leave behind.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rv5s_core::config::{Config, CoreKind, CoreSelection};
use rv5s_core::core::Core;
use rv5s_core::sim::{Simulator, run_all};
use rv5s_core::soc::{DataMemory, InstructionMemory};
use tempfile::TempDir;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::words_to_image;

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

/// `addi x1, x0, 5; sw x1, 0(x0); halt`
fn program() -> Vec<u32> {
    vec![b().addi(1, 0, 5).build(), b().sw(1, 0, 0).build(), 0xFFFF_FFFF]
}

fn seed_text(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:08b}\n")).collect()
}

/// Writes `imem.txt` (and `dmem.txt` if given) into a fresh directory.
fn iodir(words: &[u32], dmem: Option<&[u8]>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("imem.txt"), seed_text(&words_to_image(words))).unwrap();
    if let Some(bytes) = dmem {
        fs::write(dir.path().join("dmem.txt"), seed_text(bytes)).unwrap();
    }
    dir
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn run_all_writes_every_result_file() {
    let dir = iodir(&program(), Some(&[]));
    let reports = run_all(dir.path(), None, &Config::default()).unwrap();

    let kinds: Vec<CoreKind> = reports.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, vec![CoreKind::Single, CoreKind::Five]);
    for name in [
        "SS_RFResult.txt",
        "StateResult_SS.txt",
        "SS_DMEMResult.txt",
        "FS_RFResult.txt",
        "StateResult_FS.txt",
        "FS_DMEMResult.txt",
        "PerformanceMetrics.txt",
    ] {
        assert!(dir.path().join(name).is_file(), "{name} missing");
    }
}

#[test]
fn both_cores_store_the_same_data() {
    let dir = iodir(&program(), None);
    let _ = run_all(dir.path(), None, &Config::default()).unwrap();

    let ss = read(dir.path(), "SS_DMEMResult.txt");
    let fs = read(dir.path(), "FS_DMEMResult.txt");
    assert_eq!(ss, fs);

    let lines: Vec<&str> = fs.lines().collect();
    assert_eq!(lines.len(), 1000);
    assert_eq!(&lines[..4], &["00000000", "00000000", "00000000", "00000101"]);
}

#[test]
fn register_trace_has_one_block_per_cycle() {
    let dir = iodir(&program(), None);
    let reports = run_all(dir.path(), None, &Config::default()).unwrap();

    for (kind, stats) in &reports {
        let rf = read(dir.path(), &format!("{}_RFResult.txt", kind.file_prefix()));
        let headers: Vec<&str> = rf
            .lines()
            .filter(|l| l.starts_with("State of RF after executing cycle:"))
            .collect();
        assert_eq!(headers.len() as u64, stats.cycles);
        assert_eq!(headers[0], "State of RF after executing cycle:\t0");
        assert_eq!(rf.lines().count(), headers.len() * 33);

        let last = rf.lines().rev().take(32).collect::<Vec<_>>();
        assert_eq!(last[30], format!("{:032b}", 5), "x1 holds 5 at the end");
    }
}

#[test]
fn state_trace_blocks() {
    let dir = iodir(&program(), None);
    let reports = run_all(dir.path(), None, &Config::default()).unwrap();
    let five = reports[1].1;

    let state = read(dir.path(), "StateResult_FS.txt");
    let lines: Vec<&str> = state.lines().collect();
    assert_eq!(lines[0], "-".repeat(70));
    assert_eq!(lines[1], "State after executing cycle: 0");
    assert_eq!(lines[2], "IF.nop: False");
    assert_eq!(lines[3], "IF.PC: 4");
    assert_eq!(lines.len() as u64, five.cycles * 34);

    let single = read(dir.path(), "StateResult_SS.txt");
    let lines: Vec<&str> = single.lines().collect();
    assert_eq!(
        &lines[..5],
        &[
            "-".repeat(70).as_str(),
            "State after executing cycle: 0",
            "IF.PC: 4",
            "IF.nop: False",
            "-".repeat(70).as_str(),
        ]
    );
}

#[test]
fn metrics_report_lists_each_core() {
    let dir = iodir(&program(), None);
    let reports = run_all(dir.path(), None, &Config::default()).unwrap();
    let (_, single) = reports[0];
    assert_eq!(single.cycles, 4);
    assert_eq!(single.instructions_retired, 3);

    let metrics = read(dir.path(), "PerformanceMetrics.txt");
    assert!(metrics.starts_with(
        "Performance of Single Stage:\n\
         #Cycles -> 4\n\
         #Instructions -> 3\n\
         CPI -> 1.333333\n\
         IPC -> 0.750000\n\n\
         Performance of Five Stage:\n"
    ));
    assert!(metrics.ends_with('\n'));
    assert!(!metrics.ends_with("\n\n"));
}

#[test]
fn cycle_zero_truncates_old_traces() {
    let dir = iodir(&program(), None);
    fs::write(dir.path().join("FS_RFResult.txt"), "stale\n").unwrap();
    fs::write(dir.path().join("StateResult_FS.txt"), "stale\n").unwrap();

    let _ = run_all(dir.path(), None, &Config::default()).unwrap();
    assert!(!read(dir.path(), "FS_RFResult.txt").contains("stale"));
    assert!(!read(dir.path(), "StateResult_FS.txt").contains("stale"));
}

#[test]
fn separate_output_directory() {
    let input = iodir(&program(), None);
    let output = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.general.cores = CoreSelection::Five;

    let reports = run_all(input.path(), Some(output.path()), &config).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(output.path().join("FS_DMEMResult.txt").is_file());
    assert!(!output.path().join("SS_DMEMResult.txt").exists());
    assert!(!input.path().join("PerformanceMetrics.txt").exists());
}

#[test]
fn traces_can_be_disabled() {
    let dir = iodir(&program(), None);
    let mut config = Config::default();
    config.general.write_traces = false;

    let _ = run_all(dir.path(), None, &config).unwrap();
    assert!(!dir.path().join("FS_RFResult.txt").exists());
    assert!(dir.path().join("FS_DMEMResult.txt").is_file());
}

#[test]
fn missing_seeds_run_on_zeroed_memory() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.general.cores = CoreSelection::Single;

    let reports = run_all(dir.path(), None, &config).unwrap();
    let (_, stats) = reports[0];
    assert_eq!(stats.cycles, 2);
    assert_eq!(stats.instructions_retired, 1);
    assert!(read(dir.path(), "SS_DMEMResult.txt").lines().all(|l| l == "00000000"));
}

#[test]
fn data_seed_is_loaded() {
    let lw = [b().lw(1, 0, 0).build(), b().sw(1, 0, 8).build(), 0xFFFF_FFFF];
    let dir = iodir(&lw, Some(&[0, 0, 1, 2]));
    let _ = run_all(dir.path(), None, &Config::default()).unwrap();

    let lines: Vec<String> = read(dir.path(), "FS_DMEMResult.txt").lines().map(str::to_owned).collect();
    assert_eq!(&lines[8..12], &["00000000", "00000000", "00000001", "00000010"]);
}

#[test]
fn simulator_without_output_dir_writes_nothing() {
    let image = words_to_image(&program());
    let imem = InstructionMemory::new(&image, 1000);
    let dmem = DataMemory::new(&[], 1000);
    let mut sim = Simulator::new(CoreKind::Five, imem, dmem, &Config::default());

    let stats = sim.run();
    assert_eq!(stats.instructions_retired, 2);
    assert_eq!(sim.stats(), &stats);
    assert!(sim.core().is_halted());
    assert_eq!(sim.core().kind(), CoreKind::Five);
    assert_eq!(sim.core().dmem().read_data(0), 5);
}
