//! Instruction and Data Memories.
//!
//! This module implements the two memories of the simulated machine. It provides:
//! 1. **Buffer:** Shared backing storage with big-endian word access.
//! 2. **Instruction Memory:** Read-only word fetch for the IF stage.
//! 3. **Data Memory:** Word loads and stores for the MEM stage, plus a result dump.
//!
//! Out-of-range accesses are recoverable: the infallible accessors log the
//! error and read as zero (writes are dropped). The `try_*` variants return
//! the error instead.

/// Byte storage with bounds-checked big-endian word access.
pub mod buffer;

use tracing::error;

use self::buffer::ByteBuffer;
use crate::common::SimError;

/// Instruction memory, read by the fetch stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    buffer: ByteBuffer,
}

impl InstructionMemory {
    /// Creates an instruction memory of `size` bytes seeded from `image`.
    pub fn new(image: &[u8], size: usize) -> Self {
        Self {
            buffer: ByteBuffer::from_image(image, size),
        }
    }

    /// Returns the memory size in bytes.
    pub const fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Fetches the instruction word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if the word is not fully inside memory.
    pub fn try_read_instr(&self, addr: u32) -> Result<u32, SimError> {
        self.buffer.read_word(addr)
    }

    /// Fetches the instruction word at `addr`, or 0 (after logging) if out of range.
    pub fn read_instr(&self, addr: u32) -> u32 {
        self.try_read_instr(addr).unwrap_or_else(|e| {
            error!(target: "rv5s::imem", "{e}");
            0
        })
    }
}

/// Data memory, accessed by the memory stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    buffer: ByteBuffer,
}

impl DataMemory {
    /// Creates a data memory of `size` bytes seeded from `image`.
    pub fn new(image: &[u8], size: usize) -> Self {
        Self {
            buffer: ByteBuffer::from_image(image, size),
        }
    }

    /// Returns the memory size in bytes.
    pub const fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the raw memory contents.
    pub fn bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Loads the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if the word is not fully inside memory.
    pub fn try_read_data(&self, addr: u32) -> Result<u32, SimError> {
        self.buffer.read_word(addr)
    }

    /// Stores `value` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if the word is not fully inside memory.
    pub fn try_write_data(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        self.buffer.write_word(addr, value)
    }

    /// Loads the word at `addr`, or 0 (after logging) if out of range.
    pub fn read_data(&self, addr: u32) -> u32 {
        self.try_read_data(addr).unwrap_or_else(|e| {
            error!(target: "rv5s::dmem", "{e}");
            0
        })
    }

    /// Stores `value` at `addr`; out-of-range stores are logged and dropped.
    pub fn write_data(&mut self, addr: u32, value: u32) {
        if let Err(e) = self.try_write_data(addr, value) {
            error!(target: "rv5s::dmem", "{e}");
        }
    }

    /// Formats the whole memory as 8-digit binary bytes, one per line.
    pub fn dump_lines(&self) -> Vec<String> {
        self.buffer.dump_lines()
    }
}
