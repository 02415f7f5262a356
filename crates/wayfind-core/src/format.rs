//! Output format handling for wayfind
//!
//! Supports two output formats:
//! - human: the plain-text graph dump and `by {mode}` route blocks
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WayfindError;
use crate::graph::{Edge, Graph, Place, TravelMode};
use crate::path::PathResult;

/// Output format for wayfind commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(WayfindError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render one route block: a `by {mode}` header, then a `>{place} ` token
/// per path element, then a blank line.
pub fn render_route_human(mode: TravelMode, result: &PathResult) -> String {
    let mut out = format!("by {}\n", mode.as_str());
    for token in result.to_sequence() {
        out.push('>');
        out.push_str(&token);
        out.push(' ');
    }
    out.push_str("\n\n");
    out
}

/// Human tour output: the graph dump, an extra newline, then one route block
/// per mode.
pub fn render_tour_human(graph: &Graph, routes: &[RouteReport]) -> String {
    let mut out = graph.to_text();
    out.push('\n');
    for route in routes {
        out.push_str(&render_route_human(route.mode, &route.result));
    }
    out
}

/// JSON shape of a graph
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub places: Vec<Place>,
    pub edges: Vec<Edge>,
}

impl From<&Graph> for GraphReport {
    fn from(graph: &Graph) -> Self {
        Self {
            places: graph.places().cloned().collect(),
            edges: graph.edges().collect(),
        }
    }
}

/// One answered query. Serializes `path` as the observable sequence, so a
/// failed route carries the sentinel message.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub mode: TravelMode,
    pub from: Place,
    pub to: Place,
    pub found: bool,
    pub path: Vec<String>,
    #[serde(skip)]
    pub result: PathResult,
}

impl RouteReport {
    pub fn new(mode: TravelMode, from: Place, to: Place, result: PathResult) -> Self {
        Self {
            mode,
            from,
            to,
            found: result.is_found(),
            path: result.to_sequence(),
            result,
        }
    }
}

/// JSON shape of a full tour
#[derive(Debug, Serialize)]
pub struct TourReport {
    pub graph: GraphReport,
    pub routes: Vec<RouteReport>,
}
