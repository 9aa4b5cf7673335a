// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Print and get commands.
//!
//! ```text
//! new_env() (shared pool)
//!   <- config [env].entries   (put, in order)
//!   <- --set NAME=VALUE       (put, in order)
//!   -> print / get
//!   -> free()
//! ```

use std::io::{self, Write};

use crate::cli::get::{GetArgs, ValueKind};
use crate::cli::print::PrintArgs;
use crate::config::Config;
use crate::config::types::split_assignment;
use crate::env::{EnvList, new_env};
use crate::error::{EnvError, EnvironResult};

/// Builds the list from configured entries followed by `assignments`.
///
/// # Errors
///
/// Returns an error if an assignment is not `NAME=VALUE`. The list is
/// returned to the pool in that case.
pub fn build_env(config: &Config, assignments: &[String]) -> EnvironResult<EnvList> {
    let mut env = new_env();
    config.env.apply(&mut env);

    for assignment in assignments {
        match split_assignment(assignment) {
            Ok((name, value)) => {
                env.put(name, value);
            }
            Err(message) => {
                env.free();
                return Err(EnvError::InvalidAssignment(message).into());
            }
        }
    }

    tracing::debug!(entries = env.len(), "environment list built");
    Ok(env)
}

/// Formats the list for `print`.
#[must_use]
pub fn format_entries(env: &EnvList, raw: bool) -> String {
    if raw {
        env.iter().map(|entry| format!("{entry}\n")).collect()
    } else {
        env.to_string()
    }
}

/// Formats the value of `name` read through the accessor for `kind`.
#[must_use]
pub fn format_value(env: &EnvList, name: &str, kind: ValueKind) -> String {
    match kind {
        ValueKind::String => env.get(name).to_string(),
        ValueKind::Bool => env.get_bool(name).to_string(),
        ValueKind::Int => env.get_int(name).to_string(),
        ValueKind::Float => env.get_float(name).to_string(),
    }
}

/// Writes the list for `print` to `writer`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_entries<W: Write>(env: &EnvList, raw: bool, mut writer: W) -> io::Result<()> {
    if raw {
        writer.write_all(format_entries(env, true).as_bytes())
    } else {
        env.write_to(writer)
    }
}

/// Main handler for the print command.
///
/// # Errors
///
/// Returns an error if a `--set` assignment is malformed or standard output
/// cannot be written.
pub fn run_print_command(
    args: &PrintArgs,
    config: &Config,
    assignments: &[String],
) -> EnvironResult<()> {
    let mut env = build_env(config, assignments)?;
    for name in &args.unset {
        env.unset(name);
    }

    let written = write_entries(&env, args.raw, io::stdout().lock());
    env.free();
    Ok(written?)
}

/// Main handler for the get command.
///
/// # Errors
///
/// Returns an error if a `--set` assignment is malformed or standard output
/// cannot be written.
pub fn run_get_command(args: &GetArgs, config: &Config, assignments: &[String]) -> EnvironResult<()> {
    let env = build_env(config, assignments)?;
    if !env.contains(&args.name) {
        tracing::warn!(name = %args.name, "entry not set, printing default");
    }

    let value = format_value(&env, &args.name, args.kind);
    env.free();
    writeln!(io::stdout().lock(), "{value}")?;
    Ok(())
}
