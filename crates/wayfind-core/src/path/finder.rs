#[cfg(test)]
mod tests;

use crate::graph::{GraphProvider, Place, TravelMode};
use crate::path::result::PathResult;

/// Greedy single-mode path finder.
///
/// From each place the walk commits to the first neighbor (in stored order)
/// reachable by this finder's mode and not yet on the path. It never
/// backtracks, so it can report [`PathResult::NotFound`] even when another
/// neighbor choice would have reached the destination.
#[derive(Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g dyn GraphProvider,
    mode: TravelMode,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g dyn GraphProvider, mode: TravelMode) -> Self {
        Self { graph, mode }
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Attempt a path from `from` to `to` using only edges of this mode.
    pub fn find_path(&self, from: &str, to: &str) -> PathResult {
        let result = self.walk(from, to, Vec::new());
        tracing::debug!(
            mode = self.mode.as_str(),
            from,
            to,
            found = result.is_found(),
            hops = result.places().map_or(0, |p| p.len().saturating_sub(1)),
            "find_path"
        );
        result
    }

    fn walk(&self, current: &str, destination: &str, mut path: Vec<Place>) -> PathResult {
        if current == destination {
            path.push(Place::from(current));
            return PathResult::Found(path);
        }

        if !self.graph.contains(current) || !self.graph.contains(destination) {
            return PathResult::NotFound;
        }

        match self.next_hop(current, &path) {
            Some(next) => {
                tracing::trace!(mode = self.mode.as_str(), from = current, to = %next, "step");
                path.push(Place::from(current));
                self.walk(next.as_str(), destination, path)
            }
            None => {
                tracing::trace!(mode = self.mode.as_str(), at = current, "dead_end");
                PathResult::NotFound
            }
        }
    }

    /// First neighbor of `current` with a matching mode that is not on `path`.
    fn next_hop(&self, current: &str, path: &[Place]) -> Option<Place> {
        self.graph
            .neighbors(current)?
            .iter()
            .find(|(place, mode)| **mode == self.mode && !path.contains(place))
            .map(|(place, _)| place.clone())
    }
}

impl std::fmt::Debug for PathFinder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathFinder")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
