//! Integer Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 architectural
//! integer registers. It provides:
//! 1. **Hardwired Zero:** `x0` always reads zero and silently drops writes.
//! 2. **Recoverable Bounds:** Out-of-range indices log an error and read as zero.
//! 3. **Observability:** A per-cycle binary dump used by the register trace.

use tracing::error;

use crate::common::constants::{REG_COUNT, XLEN};
use crate::common::error::SimError;

/// Architectural integer register file (`x0`–`x31`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; REG_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] for indices outside `0..32`.
    pub fn try_read(&self, idx: usize) -> Result<u32, SimError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(SimError::RegisterOutOfRange { index: idx })
    }

    /// Writes a register. Writes to `x0` succeed but have no effect.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] for indices outside `0..32`.
    pub fn try_write(&mut self, idx: usize, val: u32) -> Result<(), SimError> {
        if idx >= REG_COUNT {
            return Err(SimError::RegisterOutOfRange { index: idx });
        }
        if idx != 0 {
            self.regs[idx] = val;
        }
        Ok(())
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The stored value, or 0 (after logging) when `idx` is out of range.
    pub fn read(&self, idx: usize) -> u32 {
        self.try_read(idx).unwrap_or_else(|e| {
            error!("{e}");
            0
        })
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if let Err(e) = self.try_write(idx, val) {
            error!("{e}");
        }
    }

    /// Returns all 32 register values in index order.
    pub const fn as_slice(&self) -> &[u32; REG_COUNT] {
        &self.regs
    }

    /// Formats every register as a 32-digit binary string, one per line.
    pub fn dump_lines(&self) -> Vec<String> {
        self.regs
            .iter()
            .map(|v| format!("{v:0width$b}", width = XLEN))
            .collect()
    }
}
