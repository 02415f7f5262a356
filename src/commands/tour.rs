//! `wayfind tour` - the graph dump followed by one route per travel mode
//!
//! This is also what runs when no subcommand is given.

use wayfind_core::config::Config;
use wayfind_core::error::Result;
use wayfind_core::format::{render_tour_human, GraphReport, OutputFormat, RouteReport, TourReport};
use wayfind_core::graph::{Graph, Place, TravelMode};
use wayfind_core::path::Navigator;

use crate::cli::Cli;
use crate::commands::{emit, emit_json};

/// Ask a navigator for every mode, in report order.
pub fn plan_routes(graph: &Graph, from: &Place, to: &Place) -> Vec<RouteReport> {
    TravelMode::ALL
        .into_iter()
        .map(|mode| {
            let navigator = Navigator::for_mode(graph, mode);
            let result = navigator.find_path(from.as_str(), to.as_str());
            RouteReport::new(mode, from.clone(), to.clone(), result)
        })
        .collect()
}

pub fn execute(cli: &Cli, config: &Config, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let (from, to) = config.tour_endpoints(from, to)?;
    let graph = config.generate_graph(cli.seed)?;
    let routes = plan_routes(&graph, &from, &to);

    tracing::debug!(
        from = %from,
        to = %to,
        found = routes.iter().filter(|r| r.found).count(),
        "tour"
    );

    match cli.format {
        OutputFormat::Human => emit(&render_tour_human(&graph, &routes)),
        OutputFormat::Json => emit_json(&TourReport {
            graph: GraphReport::from(&graph),
            routes,
        }),
    }
}
