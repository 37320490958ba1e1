//! Simulator: owns one core and the files it reports to.
//!
//! The simulator steps its core, writes the per-cycle traces after every
//! committed cycle, and writes the final data memory once the core halts.
//! `run_all` drives every configured core over one input directory and
//! writes the combined performance report.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::common::error::SimError;
use crate::config::{Config, CoreKind};
use crate::core::{AnyCore, Core, CycleOutcome, FiveStageCore, SingleStageCore};
use crate::sim::loader::{DMEM_FILE, IMEM_FILE, load_byte_file_or_empty};
use crate::sim::trace::{self, TraceWriter};
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Top-level simulator: one core plus its output sinks.
#[derive(Debug)]
pub struct Simulator {
    core: AnyCore,
    outdir: Option<PathBuf>,
    traces: Option<TraceWriter>,
}

impl Simulator {
    /// Creates a simulator for `kind` over the given memories.
    ///
    /// No files are written until an output directory is attached with
    /// [`Simulator::with_output_dir`].
    pub fn new(kind: CoreKind, imem: InstructionMemory, dmem: DataMemory, config: &Config) -> Self {
        let core = match kind {
            CoreKind::Single => AnyCore::Single(Box::new(SingleStageCore::new(imem, dmem, config))),
            CoreKind::Five => AnyCore::Five(Box::new(FiveStageCore::new(imem, dmem, config))),
        };
        Self {
            core,
            outdir: None,
            traces: None,
        }
    }

    /// Sends result files to `dir`; per-cycle traces only if `write_traces` is set.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>, write_traces: bool) -> Self {
        let dir = dir.into();
        self.traces = write_traces.then(|| TraceWriter::new(&dir, self.core.kind()));
        self.outdir = Some(dir);
        self
    }

    /// The simulated core.
    pub const fn core(&self) -> &AnyCore {
        &self.core
    }

    /// Performance counters of the simulated core.
    pub fn stats(&self) -> &SimStats {
        self.core.stats()
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// A trace write failure is logged and disables further tracing; the
    /// simulation itself continues.
    pub fn tick(&mut self) -> CycleOutcome {
        let outcome = self.core.step();
        if outcome == CycleOutcome::Committed
            && let Some(writer) = &self.traces
        {
            let cycle = self.core.stats().cycles.saturating_sub(1);
            if let Err(e) = writer.record(cycle, &self.core) {
                error!(target: "rv5s::sim", "{e}; disabling cycle traces");
                self.traces = None;
            }
        }
        outcome
    }

    /// Runs until the core halts, then writes the final data memory.
    ///
    /// # Returns
    ///
    /// The final performance counters.
    pub fn run(&mut self) -> SimStats {
        while self.tick() == CycleOutcome::Committed {}

        if let Some(dir) = &self.outdir
            && let Err(e) = trace::write_dmem(dir, self.core.kind(), self.core.dmem())
        {
            error!(target: "rv5s::sim", "{e}");
        }

        *self.core.stats()
    }
}

/// Runs every core selected in `config` over the seeds in `iodir`.
///
/// Each core gets its own copy of data memory. Missing or malformed seed
/// files are logged and replaced by zeroed memory. Result files go to
/// `outdir`, which defaults to `iodir`.
///
/// # Errors
///
/// Returns [`SimError::Io`] if `PerformanceMetrics.txt` cannot be written.
pub fn run_all(
    iodir: &Path,
    outdir: Option<&Path>,
    config: &Config,
) -> Result<Vec<(CoreKind, SimStats)>, SimError> {
    let outdir = outdir.unwrap_or(iodir);
    let mem = &config.memory;

    let imem_image = load_byte_file_or_empty(iodir.join(IMEM_FILE), mem.imem_size);
    let dmem_image = load_byte_file_or_empty(iodir.join(DMEM_FILE), mem.dmem_size);

    let mut reports = Vec::new();
    for &kind in config.general.cores.kinds() {
        let imem = InstructionMemory::new(&imem_image, mem.imem_size);
        let dmem = DataMemory::new(&dmem_image, mem.dmem_size);
        let mut sim = Simulator::new(kind, imem, dmem, config)
            .with_output_dir(outdir, config.general.write_traces);
        let stats = sim.run();
        info!(
            target: "rv5s::sim",
            core = kind.title(),
            cycles = stats.cycles,
            instructions = stats.instructions_retired,
            "run complete"
        );
        reports.push((kind, stats));
    }

    trace::write_metrics(outdir, &reports)?;
    Ok(reports)
}
