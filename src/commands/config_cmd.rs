//! `wayfind config` - write or show the configuration file

use wayfind_core::config::{init_config, Config};
use wayfind_core::error::Result;
use wayfind_core::format::OutputFormat;

use crate::cli::{Cli, ConfigCommands};
use crate::commands::{emit, emit_json};

pub fn execute(cli: &Cli, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Init { path, force } => {
            let target = path.as_deref().or(cli.config.as_deref());
            let written = init_config(target, *force)?;
            match cli.format {
                OutputFormat::Json => emit_json(&serde_json::json!({
                    "path": written.display().to_string(),
                })),
                OutputFormat::Human if cli.quiet => Ok(()),
                OutputFormat::Human => emit(&format!("{}\n", written.display())),
            }
        }

        ConfigCommands::Show => {
            let mut config = Config::resolve(cli.config.as_deref())?;
            if cli.seed.is_some() {
                config.seed = cli.seed;
            }
            match cli.format {
                OutputFormat::Human => emit(&config.to_toml()?),
                OutputFormat::Json => emit_json(&config),
            }
        }
    }
}
