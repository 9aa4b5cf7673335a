// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Print command arguments.

use clap::Args;

/// Arguments for the `print` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PrintArgs {
    /// Empties these entries before printing. The entries stay in the list.
    #[arg(short = 'u', long = "unset", value_name = "NAME", action = clap::ArgAction::Append)]
    pub unset: Vec<String>,

    /// Prints `NAME=VALUE` lines without the index column.
    #[arg(long)]
    pub raw: bool,
}
