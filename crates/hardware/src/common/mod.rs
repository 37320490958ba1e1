//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by both cores. It includes:
//! 1. **Constants:** Memory sizes, the halt sentinel, and instruction geometry.
//! 2. **Error Handling:** The `SimError` type returned by fallible operations.
//! 3. **Register Management:** The 32-entry integer register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading, configuration, and out-of-range accesses.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{HALT_INSTRUCTION, INSTRUCTION_SIZE, MEM_SIZE, REG_COUNT};
pub use error::SimError;
pub use reg::RegisterFile;
