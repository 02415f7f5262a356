//! CLI argument parsing for wayfind
//!
//! Global flags: --config, --seed, --format, --quiet, --verbose, --log-level,
//! --log-json. Running without a subcommand performs the default tour.

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use parse::{parse_format, parse_mode};
use wayfind_core::format::OutputFormat;
use wayfind_core::graph::TravelMode;

/// Wayfind - greedy per-mode routes over a random travel graph
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "WAYFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for graph generation (overrides the config seed)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `wayfind_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the graph, then a route for every travel mode (default)
    Tour {
        /// Start place (defaults to tour.from, then the first place)
        #[arg(long)]
        from: Option<String>,

        /// Destination (defaults to tour.to, then the last place)
        #[arg(long)]
        to: Option<String>,
    },

    /// Print the generated graph
    Dump,

    /// Find a route using a single travel mode
    Find {
        /// Travel mode: road, sky or water
        #[arg(long, short, value_parser = parse_mode)]
        mode: TravelMode,

        /// Start place
        from: String,

        /// Destination
        to: String,
    },

    /// List the place set
    Places,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration
    Init {
        /// Target path (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_find() {
        let cli = Cli::try_parse_from(["wayfind", "find", "--mode", "sky", "New York", "Miami"])
            .unwrap();
        match cli.command {
            Some(Commands::Find { mode, from, to }) => {
                assert_eq!(mode, TravelMode::Sky);
                assert_eq!(from, "New York");
                assert_eq!(to, "Miami");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = Cli::try_parse_from(["wayfind", "find", "--mode", "rail", "A", "B"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["wayfind", "--seed", "9", "--format", "json"]).unwrap();
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.command.is_none());
    }
}
