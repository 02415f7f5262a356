//! `wayfind find` - a single route through one mode's navigator
//!
//! Unknown places are not an error here: the navigator answers with the
//! failure sentinel like any other unreachable destination.

use wayfind_core::config::Config;
use wayfind_core::error::Result;
use wayfind_core::format::{render_route_human, OutputFormat, RouteReport};
use wayfind_core::graph::TravelMode;
use wayfind_core::path::Navigator;

use crate::cli::Cli;
use crate::commands::{emit, emit_json};

pub fn execute(cli: &Cli, config: &Config, mode: TravelMode, from: &str, to: &str) -> Result<()> {
    let graph = config.generate_graph(cli.seed)?;
    let result = Navigator::for_mode(&graph, mode).find_path(from, to);

    match cli.format {
        OutputFormat::Human => emit(&render_route_human(mode, &result)),
        OutputFormat::Json => emit_json(&RouteReport::new(mode, from.into(), to.into(), result)),
    }
}
