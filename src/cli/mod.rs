// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! environ [global options] <command>
//! version
//! options
//! inis
//! print [--unset NAME]... [--raw]
//! get NAME [--as string|bool|int|float]
//! ```

pub mod get;
pub mod global;
pub mod print;

#[cfg(test)]
mod tests;

use crate::cli::get::GetArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::print::PrintArgs;
use clap::{Parser, Subcommand};

/// In-memory environment lists
///
/// Builds a `name=value` list from configuration and `--set` options.
#[derive(Debug, Parser)]
#[command(
    name = "environ",
    author,
    version,
    about = "In-memory environment lists",
    long_about = "environ-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds an environment list from the `[env]` entries of the\n\
                  loaded configuration, then applies every --set NAME=VALUE in\n\
                  order. Nothing is written to the real process environment.",
    after_help = "CONFIG FILES:\n\n\
                  environ reads `environ.toml` from the current directory if it\n\
                  exists, then every file given with --ini, then ENVIRON_*\n\
                  environment variables (e.g. ENVIRON_POOL__CAPACITY=8). Use\n\
                  --no-default-ini to skip `environ.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Prints every entry as `<index> = <name>=<value>`.
    Print(PrintArgs),

    /// Prints the value of one entry.
    Get(GetArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
