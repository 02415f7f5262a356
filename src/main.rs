//! Wayfind - greedy travel routes over a randomly generated graph
//!
//! Generates a mode-tagged graph over a fixed place set, prints it, and asks
//! a navigator per travel mode for a route between two places.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use cli::Cli;
use wayfind_core::error::{ExitCode as WayfindExitCode, WayfindError};
use wayfind_core::format::OutputFormat;
use wayfind_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json(env::args().skip(1));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() && argv_format_json => {
            // `Cli.format` is not available yet, so the JSON request seen on
            // argv decides the error shape.
            let error = usage_error(&err);
            eprintln!("{}", error.to_json());
            return ExitCode::from(error.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WayfindExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Whether argv asks for JSON output, in either `--format json` or
/// `--format=json` form. Format values are case-insensitive.
fn argv_requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}

/// Map a clap parse failure onto the wayfind error it stands for.
fn usage_error(err: &clap::Error) -> WayfindError {
    match err.kind() {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            let arg = context_str(err, ContextKind::InvalidArg).unwrap_or_default();
            let value = context_str(err, ContextKind::InvalidValue)
                .unwrap_or_default()
                .to_string();
            let flag = arg.split_whitespace().next().unwrap_or(arg);
            match flag {
                "--mode" | "-m" => WayfindError::UnknownMode(value),
                "--format" => WayfindError::UnknownFormat(value),
                _ => WayfindError::invalid_value(flag.trim_start_matches('-'), value),
            }
        }
        ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::ArgumentConflict => WayfindError::UsageError(err.to_string()),
        _ => WayfindError::Other(err.to_string()),
    }
}

fn context_str(err: &clap::Error, kind: ContextKind) -> Option<&str> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.as_str()),
        _ => None,
    }
}
