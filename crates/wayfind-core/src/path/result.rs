use crate::graph::Place;

/// Message carried by a failed path attempt.
pub const FAILURE_MESSAGE: &str = "You will not reach your destination.";

/// Outcome of a single path attempt.
///
/// Failure is ordinary data, not an error: callers inspect the variant (or
/// the rendered sequence) instead of handling a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Places from origin to destination, both included
    Found(Vec<Place>),
    /// The greedy walk did not reach the destination
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn places(&self) -> Option<&[Place]> {
        match self {
            PathResult::Found(places) => Some(places),
            PathResult::NotFound => None,
        }
    }

    /// The path as its observable sequence: the place names, or a single
    /// element holding [`FAILURE_MESSAGE`].
    pub fn to_sequence(&self) -> Vec<String> {
        match self {
            PathResult::Found(places) => places.iter().map(ToString::to_string).collect(),
            PathResult::NotFound => vec![FAILURE_MESSAGE.to_string()],
        }
    }
}
