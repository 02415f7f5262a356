//! `wayfind places` - list the configured place set

use wayfind_core::config::Config;
use wayfind_core::error::Result;
use wayfind_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::{emit, emit_json};

pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            let mut out = String::new();
            for place in &config.places {
                out.push_str(place.as_str());
                out.push('\n');
            }
            emit(&out)
        }
        OutputFormat::Json => emit_json(&config.places),
    }
}
