#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use crate::domain::MemoryBlock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthOutcome {
    /// Elements were appended. `reached_ceiling` is set on the append that hit the cap.
    Grew { added: usize, reached_ceiling: bool },
    /// The block was already at its ceiling; nothing changed.
    AtCeiling,
}

/// Appends one chunk unless the block is already at its ceiling.
///
/// The check happens before the append, so once the ceiling is reached
/// the block is never touched again.
pub fn grow(block: &mut MemoryBlock, chunk_elements: usize) -> GrowthOutcome {
    if block.at_ceiling() {
        return GrowthOutcome::AtCeiling;
    }
    let added = block.append(chunk_elements);
    GrowthOutcome::Grew {
        added,
        reached_ceiling: block.at_ceiling(),
    }
}
