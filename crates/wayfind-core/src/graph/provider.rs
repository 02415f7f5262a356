use crate::graph::types::{Place, TravelMode};
use indexmap::IndexMap;

/// Outgoing edges of one place: neighbor -> mode, in stored order
pub type Neighbors = IndexMap<Place, TravelMode>;

/// Read-only adjacency lookups used by path finding
pub trait GraphProvider {
    /// Whether `place` is part of the known place set
    fn contains(&self, place: &str) -> bool;

    /// Outgoing edges of `place`, or `None` for an unknown place
    fn neighbors(&self, place: &str) -> Option<&Neighbors>;
}
