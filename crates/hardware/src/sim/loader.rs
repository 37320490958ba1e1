//! Memory Image Loader.
//!
//! This module reads the seed files that initialize instruction and data memory. It performs:
//! 1. **Parsing:** One byte per line, written as up to 8 binary digits, most-significant byte first.
//! 2. **Validation:** Malformed lines are reported with their line number.
//! 3. **Fallback:** A missing or unreadable seed is logged and replaced by zeroed memory.

use std::fs;
use std::path::Path;

use tracing::{error, warn};

use crate::common::error::SimError;

/// Name of the instruction memory seed file inside the input directory.
pub const IMEM_FILE: &str = "imem.txt";

/// Name of the data memory seed file inside the input directory.
pub const DMEM_FILE: &str = "dmem.txt";

/// Parses the text of a seed file into bytes.
///
/// Blank lines are skipped. Lines past `capacity` bytes are ignored with a
/// single warning.
///
/// # Arguments
///
/// * `text` - Contents of the seed file.
/// * `path` - File the text came from, used in errors and log messages.
/// * `capacity` - Size of the memory being initialized.
///
/// # Errors
///
/// Returns [`SimError::Parse`] for the first line that is not 1 to 8 binary digits.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use rv5s_core::sim::loader::parse_byte_lines;
///
/// let bytes = parse_byte_lines("00000101\n\n11111111\n", Path::new("dmem.txt"), 16).unwrap();
/// assert_eq!(bytes, vec![5, 255]);
/// ```
pub fn parse_byte_lines(text: &str, path: &Path, capacity: usize) -> Result<Vec<u8>, SimError> {
    let mut bytes = Vec::with_capacity(capacity.min(text.len() / 8 + 1));

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if bytes.len() == capacity {
            warn!(
                target: "rv5s::loader",
                path = %path.display(),
                line = idx + 1,
                capacity,
                "seed file is larger than memory; remaining lines ignored"
            );
            break;
        }

        let valid = line.len() <= 8 && line.bytes().all(|b| b == b'0' || b == b'1');
        let byte = if valid { u8::from_str_radix(line, 2).ok() } else { None };
        match byte {
            Some(b) => bytes.push(b),
            None => {
                return Err(SimError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    content: line.to_owned(),
                });
            }
        }
    }

    Ok(bytes)
}

/// Reads and parses a seed file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::Parse`] if a line is malformed.
pub fn load_byte_file(path: impl AsRef<Path>, capacity: usize) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
    parse_byte_lines(&text, path, capacity)
}

/// Reads a seed file, falling back to an empty image on any error.
///
/// The error is logged; memory built from the empty image is all zeros.
pub fn load_byte_file_or_empty(path: impl AsRef<Path>, capacity: usize) -> Vec<u8> {
    load_byte_file(path, capacity).unwrap_or_else(|e| {
        error!(target: "rv5s::loader", "{e}; continuing with zeroed memory");
        Vec::new()
    })
}
