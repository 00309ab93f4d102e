//! Critical Statistics Invariants:
//!
//! 1. Statistics are ALWAYS derived, NEVER primary
//! 2. Statistics can be recalculated at any time
//! 3. Statistics NEVER alter catalog state
//! 4. read + unread == total
//! 5. Author groups keep the order in which each author first appears

pub mod entity;
pub use entity::{AuthorStatistics, LibraryStatistics};
