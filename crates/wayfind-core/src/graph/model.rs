use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use indexmap::IndexMap;
use rand::Rng;

use crate::error::{Result, WayfindError};
use crate::graph::provider::{GraphProvider, Neighbors};
use crate::graph::types::{Edge, Place, TravelMode};
use crate::{bail_config, bail_invalid, trace_time};

/// The travel graph: an ordered place set with mode-tagged outgoing edges.
///
/// Immutable once built. Iteration order everywhere is place-set order, then
/// the insertion order of each place's edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    map: IndexMap<Place, Neighbors>,
}

impl Graph {
    /// Generate a complete directed graph over `places`.
    ///
    /// Every ordered pair of distinct places gets exactly one edge whose mode
    /// is drawn uniformly at random from `rng`.
    pub fn generate<R: Rng + ?Sized>(places: &[Place], rng: &mut R) -> Result<Self> {
        let start = Instant::now();
        validate_places(places)?;

        let mut map = IndexMap::with_capacity(places.len());
        for from in places {
            let mut connections = Neighbors::with_capacity(places.len() - 1);
            for to in places {
                if from != to {
                    connections.insert(to.clone(), TravelMode::random(rng));
                }
            }
            map.insert(from.clone(), connections);
        }

        let graph = Graph { map };
        tracing::debug!(
            places = graph.map.len(),
            edges = graph.edge_count(),
            "generate_graph"
        );
        trace_time!(start, "generate_graph");
        Ok(graph)
    }

    /// Start building a graph by hand.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Places in set order
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.map.keys()
    }

    pub fn place_count(&self) -> usize {
        self.map.len()
    }

    pub fn edge_count(&self) -> usize {
        self.map.values().map(IndexMap::len).sum()
    }

    /// Every edge, in dump order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.map.iter().flat_map(|(from, neighbors)| {
            neighbors.iter().map(move |(to, mode)| Edge {
                from: from.clone(),
                to: to.clone(),
                mode: *mode,
            })
        })
    }

    /// Mode of the edge `from -> to`, if there is one.
    pub fn mode_between(&self, from: &str, to: &str) -> Option<TravelMode> {
        self.map.get(from).and_then(|n| n.get(to)).copied()
    }

    /// Text dump: one `From - {from} to {to} by {mode}` line per edge, each
    /// source place's group followed by a blank line.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl GraphProvider for Graph {
    fn contains(&self, place: &str) -> bool {
        self.map.contains_key(place)
    }

    fn neighbors(&self, place: &str) -> Option<&Neighbors> {
        self.map.get(place)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, neighbors) in &self.map {
            for (to, mode) in neighbors {
                writeln!(f, "From - {from} to {to} by {mode}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Check that a place set is usable: non-empty, no blank names, no duplicates.
pub fn validate_places(places: &[Place]) -> Result<()> {
    if places.is_empty() {
        bail_config!("place set is empty");
    }

    let mut seen = HashSet::with_capacity(places.len());
    for place in places {
        if place.as_str().trim().is_empty() {
            bail_config!("place names must not be blank");
        }
        if !seen.insert(place.as_str()) {
            bail_config!("duplicate place: {place}");
        }
    }
    Ok(())
}

/// Builder for hand-made graphs with an arbitrary (possibly partial) edge set
#[derive(Debug, Default)]
pub struct GraphBuilder {
    places: Vec<Place>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn places<I, P>(mut self, places: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Place>,
    {
        self.places.extend(places.into_iter().map(Into::into));
        self
    }

    /// Add the edge `from -> to`. A later edge for the same pair replaces the
    /// mode but keeps the original position.
    pub fn edge(mut self, from: impl Into<Place>, to: impl Into<Place>, mode: TravelMode) -> Self {
        self.edges.push(Edge {
            from: from.into(),
            to: to.into(),
            mode,
        });
        self
    }

    pub fn build(self) -> Result<Graph> {
        validate_places(&self.places)?;

        let mut map: IndexMap<Place, Neighbors> = self
            .places
            .into_iter()
            .map(|p| (p, Neighbors::new()))
            .collect();

        for edge in self.edges {
            if edge.from == edge.to {
                bail_invalid!("edge", format!("self-edge on {}", edge.from));
            }
            if !map.contains_key(&edge.to) {
                return Err(WayfindError::not_found("place", &edge.to));
            }
            match map.get_mut(&edge.from) {
                Some(neighbors) => {
                    neighbors.insert(edge.to, edge.mode);
                }
                None => return Err(WayfindError::not_found("place", &edge.from)),
            }
        }

        Ok(Graph { map })
    }
}
