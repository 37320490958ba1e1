//! Pipeline Latch Interface.
//!
//! This module defines the common trait for pipeline latches. It provides:
//! 1. **Bubble Construction:** A canonical empty (no-op) entry for each stage.
//! 2. **Status Checking:** Whether an entry carries a live instruction.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of one instruction as it moves between stages.
pub trait PipelineLatch: Sized {
    /// Returns a bubble: an entry with its `nop` flag set and every other field zero.
    fn bubble() -> Self;

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if there is no live instruction in the latch, `false` otherwise.
    fn is_bubble(&self) -> bool;
}
