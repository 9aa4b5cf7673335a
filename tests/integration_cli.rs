// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command handlers.

use clap::Parser;
use environ_rs::cli::get::ValueKind;
use environ_rs::cli::{Cli, Command};
use environ_rs::cmd::env::{build_env, format_value};
use environ_rs::config::Config;
use environ_rs::config::loader::ConfigLoader;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["environ", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["environ", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Print / Get
// =============================================================================

#[test]
fn cli_sets_then_get() {
    let cli = Cli::try_parse_from([
        "environ",
        "--no-default-ini",
        "-s",
        "PORT=8080",
        "-s",
        "DEBUG=T",
        "-s",
        "PORT=9090",
        "get",
        "PORT",
        "--as",
        "int",
    ])
    .unwrap();

    let config = cli
        .global
        .apply_overrides(ConfigLoader::new())
        .unwrap()
        .build()
        .unwrap();
    let env = build_env(&config, &cli.global.assignments).unwrap();

    let Some(Command::Get(args)) = &cli.command else {
        panic!("expected get command");
    };
    assert_eq!(format_value(&env, &args.name, args.kind), "9090");
    assert_eq!(format_value(&env, "DEBUG", ValueKind::Bool), "true");
    assert_eq!(env.as_slice(), ["PORT=9090", "DEBUG=T"]);
    env.free();
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["environ"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command_fails() {
    assert!(Cli::try_parse_from(["environ", "export"]).is_err());
}

#[test]
fn cli_print_defaults() {
    let cli = Cli::try_parse_from(["environ", "print"]).unwrap();
    let Some(Command::Print(args)) = cli.command else {
        panic!("expected print command");
    };
    assert!(args.unset.is_empty());
    assert!(!args.raw);
    assert!(Config::default().env.entries.is_empty());
}
