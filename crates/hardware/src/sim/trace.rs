//! Result File Writers.
//!
//! This module writes the files a run leaves in the output directory. It provides:
//! 1. **Per-cycle traces:** `<P>_RFResult.txt` (register file) and `StateResult_<P>.txt` (latches).
//! 2. **Final memory:** `<P>_DMEMResult.txt`, one byte per line.
//! 3. **Metrics:** `PerformanceMetrics.txt`, one section per simulated core.
//!
//! `<P>` is the core's file prefix (`SS` or `FS`). Trace files are truncated
//! when cycle 0 is written and appended to afterwards.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::error::SimError;
use crate::config::CoreKind;
use crate::core::Core;
use crate::soc::DataMemory;
use crate::stats::SimStats;

/// Separator line opening each state-dump block.
pub const STATE_RULE: &str = "----------------------------------------------------------------------";

/// Name of the combined performance report.
pub const METRICS_FILE: &str = "PerformanceMetrics.txt";

/// Path of the register-file trace for `kind` inside `dir`.
pub fn rf_trace_path(dir: &Path, kind: CoreKind) -> PathBuf {
    dir.join(format!("{}_RFResult.txt", kind.file_prefix()))
}

/// Path of the state trace for `kind` inside `dir`.
pub fn state_trace_path(dir: &Path, kind: CoreKind) -> PathBuf {
    dir.join(format!("StateResult_{}.txt", kind.file_prefix()))
}

/// Path of the final data-memory dump for `kind` inside `dir`.
pub fn dmem_result_path(dir: &Path, kind: CoreKind) -> PathBuf {
    dir.join(format!("{}_DMEMResult.txt", kind.file_prefix()))
}

fn open(path: &Path, truncate: bool) -> Result<BufWriter<File>, SimError> {
    let file = if truncate {
        File::create(path)
    } else {
        OpenOptions::new().create(true).append(true).open(path)
    };
    file.map(BufWriter::new).map_err(|e| SimError::io(path, e))
}

fn write_lines<I, S>(path: &Path, truncate: bool, lines: I) -> Result<(), SimError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = open(path, truncate)?;
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(|e| SimError::io(path, e))?;
    }
    out.flush().map_err(|e| SimError::io(path, e))
}

/// Writes the per-cycle register and state traces of one core.
#[derive(Clone, Debug)]
pub struct TraceWriter {
    rf_path: PathBuf,
    state_path: PathBuf,
}

impl TraceWriter {
    /// Creates a writer for `kind`'s trace files inside `dir`.
    pub fn new(dir: &Path, kind: CoreKind) -> Self {
        Self {
            rf_path: rf_trace_path(dir, kind),
            state_path: state_trace_path(dir, kind),
        }
    }

    /// Appends the register file and state dump for `cycle`.
    ///
    /// Cycle 0 truncates both files first.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if either file cannot be opened or written.
    pub fn record(&self, cycle: u64, core: &dyn Core) -> Result<(), SimError> {
        let truncate = cycle == 0;

        let rf_header = format!("State of RF after executing cycle:\t{cycle}");
        let rf = core.regs().dump_lines();
        write_lines(
            &self.rf_path,
            truncate,
            std::iter::once(rf_header).chain(rf),
        )?;

        let state_header = format!("State after executing cycle: {cycle}");
        write_lines(
            &self.state_path,
            truncate,
            [STATE_RULE.to_owned(), state_header]
                .into_iter()
                .chain(core.dump_state()),
        )
    }
}

/// Writes the final data memory of `kind` to `<P>_DMEMResult.txt` in `dir`.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be written.
pub fn write_dmem(dir: &Path, kind: CoreKind, dmem: &DataMemory) -> Result<(), SimError> {
    write_lines(&dmem_result_path(dir, kind), true, dmem.dump_lines())
}

/// Writes `PerformanceMetrics.txt` in `dir` with one section per core.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be written.
pub fn write_metrics(dir: &Path, reports: &[(CoreKind, SimStats)]) -> Result<(), SimError> {
    let sections: Vec<String> = reports
        .iter()
        .map(|(kind, stats)| stats.metrics_report(kind.title()))
        .collect();
    let report = sections.join("\n");
    write_lines(&dir.join(METRICS_FILE), true, [report.trim_end()])
}
