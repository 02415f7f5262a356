//! Command dispatch logic for wayfind
use std::time::Instant;

use wayfind_core::config::Config;
use wayfind_core::error::Result;
use wayfind_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Resolved per command so `config init` still works with a broken file.
    let load_config = || -> Result<Config> {
        let config = Config::resolve(cli.config.as_deref())?;
        trace_time!(start, "resolve_config");
        Ok(config)
    };

    let result = match &cli.command {
        None => commands::tour::execute(cli, &load_config()?, None, None),

        Some(Commands::Tour { from, to }) => {
            commands::tour::execute(cli, &load_config()?, from.as_deref(), to.as_deref())
        }

        Some(Commands::Dump) => commands::dump::execute(cli, &load_config()?),

        Some(Commands::Find { mode, from, to }) => {
            commands::find::execute(cli, &load_config()?, *mode, from, to)
        }

        Some(Commands::Places) => commands::places::execute(cli, &load_config()?),

        Some(Commands::Config(cmd)) => commands::config_cmd::execute(cli, cmd),
    };

    trace_time!(start, "command");
    result
}
