// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::get::ValueKind;
use crate::cli::{Cli, Command};
use crate::config::loader::ConfigLoader;
use crate::logging::LogLevel;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["environ", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "environ",
        "-l",
        "5",
        "--ini",
        "a.toml",
        "-s",
        "A=1",
        "--set",
        "B=2",
        "print",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.inis.len(), 1);
    assert_eq!(cli.global.assignments, ["A=1", "B=2"]);
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["environ", "-l", "7", "print"]).is_err());
}

#[test]
fn test_parse_print_unset() {
    let cli = Cli::try_parse_from(["environ", "print", "-u", "A", "--unset", "B", "--raw"]).unwrap();
    let Some(Command::Print(args)) = cli.command else {
        panic!("expected print command");
    };
    assert_eq!(args.unset, ["A", "B"]);
    assert!(args.raw);
}

#[test]
fn test_parse_get_kinds() {
    let cli = Cli::try_parse_from(["environ", "get", "PORT"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.name, "PORT");
    assert_eq!(args.kind, ValueKind::String);

    let cli = Cli::try_parse_from(["environ", "get", "PORT", "--as", "int"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.kind, ValueKind::Int);

    assert!(Cli::try_parse_from(["environ", "get", "PORT", "--as", "date"]).is_err());
}

#[test]
fn test_overrides_apply_to_config() {
    let cli = Cli::try_parse_from(["environ", "-l", "4", "--log-file", "x.log", "print"]).unwrap();
    let config = cli
        .global
        .apply_overrides(ConfigLoader::new())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("x.log"))
    );
}
