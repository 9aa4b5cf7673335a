// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{EnvConfig, split_assignment};
use super::{Config, ConfigLoader};
use crate::env::EnvList;
use crate::error::EnvironError;
use crate::logging::LogLevel;

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[global]
log_file = "environ.log"

[env]
entries = ["A=1", "B=2"]
"#,
    )
    .unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    env.entries           = A=1 B=2
    global.file_log_level = 5
    global.json_log       = false
    global.log_file       = environ.log
    global.log_level      = 3
    pool.capacity         = 64
    pool.reset_on_acquire = true
    ");
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
log_level = 4
log_file = "logs/environ.log"

[pool]
capacity = 8
reset_on_acquire = false

[env]
entries = ["HOME=/home/user", "DEBUG=true", "HOME=/root"]
"#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.pool.capacity, 8);
    assert!(!config.pool.reset_on_acquire);
    assert_eq!(config.env.entries.len(), 3);
}

#[test]
fn test_parse_rejects_unknown_section() {
    assert!(Config::parse("[tasks]\nfoo = 1\n").is_err());
}

#[test]
fn test_parse_rejects_bad_log_level() {
    assert!(Config::parse("[global]\nlog_level = 9\n").is_err());
}

#[test]
fn test_parse_rejects_malformed_entry() {
    let err = Config::parse("[env]\nentries = [\"NOVALUE\"]\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EnvironError>(),
        Some(EnvironError::Config(_))
    ));
    insta::assert_snapshot!(err.to_string(), @"config error: invalid value for 'entries' in section '[env]': entry 'NOVALUE' has no '='");
}

#[test]
fn test_validate_reports_config_error() {
    let config = Config {
        env: EnvConfig {
            entries: vec!["A=1".to_string(), "=orphan".to_string()],
        },
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"config error: invalid value for 'entries' in section '[env]': entry '=orphan' has an empty name");
}

#[test]
fn test_loader_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[pool]\ncapacity = 8\n")
        .set("pool.capacity", 2)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.pool.capacity, 2);
}

#[test]
fn test_loaded_files_listing() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("does-not-exist/environ.toml");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}

#[test]
fn test_split_assignment() {
    assert_eq!(split_assignment("A=1=2"), Ok(("A", "1=2")));
    assert_eq!(split_assignment("A="), Ok(("A", "")));
    assert!(split_assignment("=1").is_err());
    assert!(split_assignment("A").is_err());
}

#[test]
fn test_env_config_apply_in_order() {
    let env_config = EnvConfig {
        entries: vec![
            "a=1".to_string(),
            "b=2".to_string(),
            "a=9".to_string(),
        ],
    };
    let mut env = EnvList::new();
    env_config.apply(&mut env);
    assert_eq!(env.as_slice(), ["a=9", "b=2"]);
}
