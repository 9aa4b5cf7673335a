// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Get command arguments.

use clap::{Args, ValueEnum};

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Name of the entry to read.
    pub name: String,

    /// How to interpret the value.
    #[arg(short = 'a', long = "as", value_enum, default_value_t = ValueKind::String)]
    pub kind: ValueKind,
}

/// Typed accessor used by `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueKind {
    #[default]
    String,
    Bool,
    Int,
    Float,
}
