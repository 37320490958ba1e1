//! Simulation driver, seed loading, and result files.
//!
//! Provides the seed-file loader, the writers for trace and result files,
//! and the `Simulator` that ties a core to them.

/// Seed-file parsing and loading.
pub mod loader;

/// Simulator driver and multi-core runs.
pub mod simulator;

/// Trace, memory-dump, and metrics file writers.
pub mod trace;

pub use self::simulator::{Simulator, run_all};
