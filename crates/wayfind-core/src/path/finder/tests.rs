use super::*;
use crate::graph::{Graph, Place};
use crate::path::result::FAILURE_MESSAGE;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn names(result: &PathResult) -> Vec<String> {
    result.to_sequence()
}

/// A->B Road, A->C Sky, B->C Road, C->A Water
fn abc_graph() -> Graph {
    Graph::builder()
        .places(["A", "B", "C"])
        .edge("A", "B", TravelMode::Road)
        .edge("A", "C", TravelMode::Sky)
        .edge("B", "C", TravelMode::Road)
        .edge("C", "A", TravelMode::Water)
        .build()
        .unwrap()
}

#[test]
fn test_road_walks_through_intermediate() {
    let graph = abc_graph();
    let finder = PathFinder::new(&graph, TravelMode::Road);
    assert_eq!(names(&finder.find_path("A", "C")), ["A", "B", "C"]);
}

#[test]
fn test_sky_goes_direct() {
    let graph = abc_graph();
    let finder = PathFinder::new(&graph, TravelMode::Sky);
    assert_eq!(names(&finder.find_path("A", "C")), ["A", "C"]);
}

#[test]
fn test_water_has_no_first_hop() {
    let graph = abc_graph();
    let finder = PathFinder::new(&graph, TravelMode::Water);
    let result = finder.find_path("A", "C");
    assert_eq!(result, PathResult::NotFound);
    assert_eq!(names(&result), [FAILURE_MESSAGE]);
}

#[test]
fn test_same_endpoints_is_single_place() {
    let graph = abc_graph();
    for mode in TravelMode::ALL {
        let finder = PathFinder::new(&graph, mode);
        for place in ["A", "B", "C"] {
            assert_eq!(names(&finder.find_path(place, place)), [place]);
        }
    }
}

#[test]
fn test_same_unknown_endpoints_short_circuit() {
    // Equality is checked before membership.
    let graph = abc_graph();
    let finder = PathFinder::new(&graph, TravelMode::Road);
    assert_eq!(names(&finder.find_path("Z", "Z")), ["Z"]);
}

#[test]
fn test_unknown_endpoints_fail() {
    let graph = abc_graph();
    for mode in TravelMode::ALL {
        let finder = PathFinder::new(&graph, mode);
        assert_eq!(finder.find_path("X", "Y"), PathResult::NotFound);
        assert_eq!(finder.find_path("A", "Y"), PathResult::NotFound);
        assert_eq!(finder.find_path("X", "A"), PathResult::NotFound);
    }
}

#[test]
fn test_greedy_takes_first_matching_neighbor() {
    // A's Road neighbors are X then Y. X leads nowhere by road, Y reaches D.
    let graph = Graph::builder()
        .places(["A", "X", "Y", "D"])
        .edge("A", "X", TravelMode::Road)
        .edge("A", "Y", TravelMode::Road)
        .edge("A", "D", TravelMode::Sky)
        .edge("X", "A", TravelMode::Water)
        .edge("Y", "D", TravelMode::Road)
        .build()
        .unwrap();

    let finder = PathFinder::new(&graph, TravelMode::Road);
    assert_eq!(finder.find_path("A", "D"), PathResult::NotFound);
    // The route through Y exists and works on its own.
    assert_eq!(names(&finder.find_path("Y", "D")), ["Y", "D"]);
}

#[test]
fn test_greedy_prefers_earlier_neighbor_when_both_succeed() {
    let graph = Graph::builder()
        .places(["A", "X", "Y", "D"])
        .edge("A", "X", TravelMode::Sky)
        .edge("A", "Y", TravelMode::Sky)
        .edge("X", "D", TravelMode::Sky)
        .edge("Y", "D", TravelMode::Sky)
        .build()
        .unwrap();

    let finder = PathFinder::new(&graph, TravelMode::Sky);
    assert_eq!(names(&finder.find_path("A", "D")), ["A", "X", "D"]);
}

#[test]
fn test_cycle_guard_skips_visited_places() {
    let graph = Graph::builder()
        .places(["A", "B", "C"])
        .edge("A", "B", TravelMode::Road)
        .edge("B", "A", TravelMode::Road)
        .edge("B", "C", TravelMode::Road)
        .build()
        .unwrap();

    let finder = PathFinder::new(&graph, TravelMode::Road);
    assert_eq!(names(&finder.find_path("A", "C")), ["A", "B", "C"]);
}

#[test]
fn test_cycle_guard_terminates_on_closed_loop() {
    let graph = Graph::builder()
        .places(["A", "B", "C"])
        .edge("A", "B", TravelMode::Water)
        .edge("B", "A", TravelMode::Water)
        .build()
        .unwrap();

    let finder = PathFinder::new(&graph, TravelMode::Water);
    assert_eq!(finder.find_path("A", "C"), PathResult::NotFound);
}

#[test]
fn test_repeated_queries_are_identical() {
    let places: Vec<Place> = ["New York", "Los Angeles", "Chicago", "Houston", "Miami"]
        .into_iter()
        .map(Into::into)
        .collect();
    let graph = Graph::generate(&places, &mut StdRng::seed_from_u64(2024)).unwrap();

    for mode in TravelMode::ALL {
        let finder = PathFinder::new(&graph, mode);
        let first = finder.find_path("New York", "Miami");
        for _ in 0..5 {
            assert_eq!(finder.find_path("New York", "Miami"), first);
        }
    }
}

#[test]
fn test_found_path_has_no_repeats_and_valid_hops() {
    let places: Vec<Place> = (0..8).map(|i| format!("P{i}").into()).collect();
    for seed in 0..50 {
        let graph = Graph::generate(&places, &mut StdRng::seed_from_u64(seed)).unwrap();
        for mode in TravelMode::ALL {
            let finder = PathFinder::new(&graph, mode);
            if let PathResult::Found(path) = finder.find_path("P0", "P7") {
                let unique: std::collections::HashSet<_> = path.iter().collect();
                assert_eq!(unique.len(), path.len(), "seed {seed}: repeated place");
                for hop in path.windows(2) {
                    assert_eq!(
                        graph.mode_between(hop[0].as_str(), hop[1].as_str()),
                        Some(mode)
                    );
                }
            }
        }
    }
}

#[test]
fn test_finder_reports_mode() {
    let graph = abc_graph();
    assert_eq!(PathFinder::new(&graph, TravelMode::Sky).mode(), TravelMode::Sky);
}
