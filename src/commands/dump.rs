//! `wayfind dump` - print the generated graph

use wayfind_core::config::Config;
use wayfind_core::error::Result;
use wayfind_core::format::{GraphReport, OutputFormat};

use crate::cli::Cli;
use crate::commands::{emit, emit_json};

pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let graph = config.generate_graph(cli.seed)?;

    match cli.format {
        OutputFormat::Human => emit(&graph.to_text()),
        OutputFormat::Json => emit_json(&GraphReport::from(&graph)),
    }
}
