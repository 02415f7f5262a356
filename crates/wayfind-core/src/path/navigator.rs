use crate::graph::{GraphProvider, TravelMode};
use crate::path::finder::PathFinder;
use crate::path::result::PathResult;

/// Caller-facing entry point bound to one mode's finder
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'g> {
    finder: PathFinder<'g>,
}

impl<'g> Navigator<'g> {
    pub fn new(finder: PathFinder<'g>) -> Self {
        Self { finder }
    }

    pub fn for_mode(graph: &'g dyn GraphProvider, mode: TravelMode) -> Self {
        Self::new(PathFinder::new(graph, mode))
    }

    pub fn mode(&self) -> TravelMode {
        self.finder.mode()
    }

    pub fn find_path(&self, from: &str, to: &str) -> PathResult {
        self.finder.find_path(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_navigator_delegates_to_finder() {
        let graph = Graph::builder()
            .places(["A", "B", "C"])
            .edge("A", "B", TravelMode::Road)
            .edge("A", "C", TravelMode::Sky)
            .edge("B", "C", TravelMode::Road)
            .build()
            .unwrap();

        for mode in TravelMode::ALL {
            let finder = PathFinder::new(&graph, mode);
            let navigator = Navigator::new(finder);
            assert_eq!(navigator.mode(), mode);
            assert_eq!(navigator.find_path("A", "C"), finder.find_path("A", "C"));
        }
    }

    #[test]
    fn test_for_mode() {
        let graph = Graph::builder()
            .places(["A", "B"])
            .edge("A", "B", TravelMode::Water)
            .build()
            .unwrap();

        let navigator = Navigator::for_mode(&graph, TravelMode::Water);
        assert_eq!(navigator.find_path("A", "B").to_sequence(), vec!["A", "B"]);
        assert!(!Navigator::for_mode(&graph, TravelMode::Road)
            .find_path("A", "B")
            .is_found());
    }
}
