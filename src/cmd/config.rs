// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options and inis commands.

use std::io::{self, Write};

use crate::config::Config;
use crate::error::EnvironResult;

/// Text of the `inis` report when no source was added.
pub const NO_SOURCES: &str = "no configuration sources loaded";

/// Writes the effective configuration, one `key = value` line per option.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_options<W: Write>(config: &Config, mut writer: W) -> io::Result<()> {
    for line in config.format_options() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes the numbered list of configuration sources.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_inis<W: Write>(sources: &[String], mut writer: W) -> io::Result<()> {
    if sources.is_empty() {
        return writeln!(writer, "{NO_SOURCES}");
    }
    sources
        .iter()
        .try_for_each(|source| writeln!(writer, "{source}"))
}

/// Main handler for the options command.
///
/// # Errors
///
/// Returns an error if standard output cannot be written.
pub fn run_options_command(config: &Config) -> EnvironResult<()> {
    write_options(config, io::stdout().lock())?;
    Ok(())
}

/// Main handler for the inis command.
///
/// # Errors
///
/// Returns an error if standard output cannot be written.
pub fn run_inis_command(sources: &[String]) -> EnvironResult<()> {
    write_inis(sources, io::stdout().lock())?;
    Ok(())
}
