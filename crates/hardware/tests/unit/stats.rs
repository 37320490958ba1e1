//! SimStats unit tests.
//!
//! Verifies derived metric computation and the performance report format.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rv5s_core::stats::SimStats;

fn stats(cycles: u64, instructions_retired: u64) -> SimStats {
    SimStats {
        cycles,
        instructions_retired,
        ..Default::default()
    }
}

#[test]
fn default_stats_all_zero() {
    let s = SimStats::default();
    assert_eq!(s.cycles, 0);
    assert_eq!(s.instructions_retired, 0);
    assert_eq!(s.stalls_data, 0);
    assert_eq!(s.flushes_control, 0);
    assert_eq!(s.branches_taken, 0);
    assert_eq!(s.unsupported, 0);
}

#[test]
fn cpi_and_ipc() {
    let s = stats(7, 2);
    assert!((s.cpi() - 3.5).abs() < 1e-12);
    assert!((s.ipc() - 2.0 / 7.0).abs() < 1e-12);
}

#[test]
fn zero_denominators_are_clamped() {
    assert_eq!(stats(0, 0).cpi(), 0.0);
    assert_eq!(stats(0, 0).ipc(), 0.0);
    assert_eq!(stats(4, 0).cpi(), 4.0);
    assert_eq!(stats(0, 3).ipc(), 3.0);
}

#[test]
fn metrics_report_format() {
    assert_eq!(
        stats(5, 1).metrics_report("Five Stage"),
        "Performance of Five Stage:\n\
         #Cycles -> 5\n\
         #Instructions -> 1\n\
         CPI -> 5.000000\n\
         IPC -> 0.200000\n"
    );
}

#[test]
fn metrics_report_rounds_to_six_places() {
    let report = stats(3, 2).metrics_report("Single Stage");
    assert!(report.starts_with("Performance of Single Stage:\n"));
    assert!(report.contains("CPI -> 1.500000\n"));
    assert!(report.contains("IPC -> 0.666667\n"));
}

proptest! {
    #[test]
    fn cpi_times_ipc_is_one(cycles in 1u64..1_000_000, instructions in 1u64..1_000_000) {
        let s = stats(cycles, instructions);
        prop_assert!((s.cpi() * s.ipc() - 1.0).abs() < 1e-9);
    }
}
