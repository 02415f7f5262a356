//! CLI commands for wayfind

pub mod config_cmd;
pub mod dispatch;
pub mod dump;
pub mod find;
pub mod places;
pub mod tour;

use std::io::Write;

use serde::Serialize;
use wayfind_core::error::Result;

/// Write command output to stdout as-is.
pub(crate) fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Write a value to stdout as pretty JSON followed by a newline.
pub(crate) fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    emit(&text)
}
