//! Wayfind Core Library
//!
//! A fixed set of places joined by a randomly generated, mode-tagged travel
//! graph, and a greedy per-mode path finder over it.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod path;
