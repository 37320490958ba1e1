//! Byte Buffer Implementation.
//!
//! This module provides the fixed-size byte array behind both memories. Words
//! are stored big-endian (most-significant byte at the lowest address) and a
//! word access is valid only when all four bytes lie inside the buffer.

use crate::common::constants::{BYTE_BITS, WORD_BYTES};
use crate::common::error::SimError;

/// Fixed-size, zero-initialised byte storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Creates a buffer of `size` bytes seeded from `image`.
    ///
    /// Bytes beyond `size` are dropped; a short image leaves the tail zeroed.
    pub fn from_image(image: &[u8], size: usize) -> Self {
        let mut buffer = Self::new(size);
        let n = image.len().min(size);
        buffer.bytes[..n].copy_from_slice(&image[..n]);
        buffer
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the raw bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the byte range of the word at `addr`, or an error if any byte is out of range.
    fn word_range(&self, addr: u32) -> Result<std::ops::Range<usize>, SimError> {
        let start = addr as usize;
        match start.checked_add(WORD_BYTES) {
            Some(end) if end <= self.bytes.len() => Ok(start..end),
            _ => Err(SimError::AddressOutOfRange {
                addr,
                size: self.bytes.len(),
            }),
        }
    }

    /// Reads the big-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if any of the four bytes lies past the end.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        let range = self.word_range(addr)?;
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&self.bytes[range]);
        Ok(u32::from_be_bytes(word))
    }

    /// Writes `value` big-endian at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if any of the four bytes lies past the end.
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        let range = self.word_range(addr)?;
        self.bytes[range].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Formats every byte as an 8-digit binary string, one per entry.
    pub fn dump_lines(&self) -> Vec<String> {
        self.bytes
            .iter()
            .map(|b| format!("{b:0width$b}", width = BYTE_BITS))
            .collect()
    }
}
