//! Configuration system for the simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline constants (memory sizes, cycle budget).
//! 2. **Structures:** Hierarchical config for general settings and memories.
//! 3. **Enums:** Core variant selection.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with
//! `Config::default()`. Every field is optional in JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Instruction memory size in bytes.
    pub const IMEM_SIZE: usize = constants::MEM_SIZE;

    /// Data memory size in bytes.
    pub const DMEM_SIZE: usize = constants::MEM_SIZE;

    /// Cycle budget after which a run is abandoned.
    ///
    /// Protects against programs that never reach the halt sentinel.
    pub const MAX_CYCLES: u64 = constants::DEFAULT_MAX_CYCLES;

    /// Whether per-cycle register and state traces are written.
    pub const WRITE_TRACES: bool = true;
}

/// Processor core variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreKind {
    /// Non-pipelined reference core: one instruction per cycle.
    #[serde(alias = "ss", alias = "single_stage")]
    Single,
    /// Five-stage pipelined core.
    #[serde(alias = "fs", alias = "five_stage")]
    Five,
}

impl CoreKind {
    /// Prefix used for this core's result files (`SS` or `FS`).
    pub const fn file_prefix(self) -> &'static str {
        match self {
            Self::Single => "SS",
            Self::Five => "FS",
        }
    }

    /// Human-readable name used in the performance report.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Single => "Single Stage",
            Self::Five => "Five Stage",
        }
    }
}

/// Which cores a run simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreSelection {
    /// Single-stage core only.
    Single,
    /// Five-stage core only.
    Five,
    /// Both cores, each with its own copy of data memory (default).
    #[default]
    Both,
}

impl CoreSelection {
    /// The cores to run, single-stage first.
    pub const fn kinds(self) -> &'static [CoreKind] {
        match self {
            Self::Single => &[CoreKind::Single],
            Self::Five => &[CoreKind::Five],
            Self::Both => &[CoreKind::Single, CoreKind::Five],
        }
    }
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use rv5s_core::config::{Config, CoreSelection};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "cores": "five" },
///     "memory": { "dmem_size": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.cores, CoreSelection::Five);
/// assert_eq!(config.memory.dmem_size, 4096);
/// assert_eq!(config.memory.imem_size, 1000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Memory sizes
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the JSON is malformed or mistyped.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or
    /// [`SimError::Config`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit per-stage `debug` trace events (also forced on by the `always-trace` feature).
    pub trace_instructions: bool,

    /// Cycle budget; a core that has not drained by then is stopped with a warning.
    pub max_cycles: u64,

    /// Write the per-cycle register (`*_RFResult.txt`) and state (`StateResult_*.txt`) traces.
    pub write_traces: bool,

    /// Cores to simulate.
    pub cores: CoreSelection,
}

impl GeneralConfig {
    /// Whether stage tracing is enabled, taking the `always-trace` feature into account.
    pub const fn trace_enabled(&self) -> bool {
        self.trace_instructions || cfg!(feature = "always-trace")
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
            write_traces: defaults::WRITE_TRACES,
            cores: CoreSelection::default(),
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Instruction memory size in bytes.
    pub imem_size: usize,
    /// Data memory size in bytes.
    pub dmem_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_size: defaults::IMEM_SIZE,
            dmem_size: defaults::DMEM_SIZE,
        }
    }
}
