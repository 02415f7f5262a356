//! Greedy per-mode path finding
//!
//! - `finder`: the recursive first-match walk restricted to one travel mode
//! - `navigator`: caller-facing wrapper around a single finder
//! - `result`: found path or the failure sentinel

pub mod finder;
pub mod navigator;
pub mod result;

pub use finder::PathFinder;
pub use navigator::Navigator;
pub use result::{PathResult, FAILURE_MESSAGE};
