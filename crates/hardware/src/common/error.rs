//! Simulator error definitions.
//!
//! This module defines the error type for every fallible operation in the crate. It covers:
//! 1. **I/O Failures:** Seed files that cannot be read and result files that cannot be written.
//! 2. **Parse Failures:** Seed-file lines that are not binary byte patterns.
//! 3. **Bounds Violations:** Memory addresses and register indices outside the fixed space.
//! 4. **Decode Failures:** Instruction words outside the supported subset.
//! 5. **Configuration:** JSON configuration that fails to deserialize.
//!
//! Bounds violations are recoverable by policy: the infallible accessors on memories and the
//! register file log the error and return zero, while the `try_*` variants surface it here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the simulator library.
#[derive(Debug, Error)]
pub enum SimError {
    /// A seed, configuration, or result file could not be opened, read, or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying operating-system error.
        #[source]
        source: io::Error,
    },

    /// A seed-file line is not a valid byte pattern.
    #[error("{}:{line}: expected a binary byte pattern, found {content:?}", path.display())]
    Parse {
        /// Seed file being parsed.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Offending line contents (trimmed).
        content: String,
    },

    /// A 4-byte word access extends past the end of memory.
    #[error("memory access at address {addr} exceeds memory size {size}")]
    AddressOutOfRange {
        /// Byte address of the first byte of the word.
        addr: u32,
        /// Memory size in bytes.
        size: usize,
    },

    /// A register index is outside `0..32`.
    #[error("register index {index} out of range")]
    RegisterOutOfRange {
        /// Requested register index.
        index: usize,
    },

    /// Instruction word outside the supported subset.
    ///
    /// Never fatal: the pipeline turns it into a bubble.
    #[error("unsupported instruction {inst:#010x}")]
    UnsupportedInstruction {
        /// Raw instruction encoding.
        inst: u32,
    },

    /// Configuration JSON is malformed or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
