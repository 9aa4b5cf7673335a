// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> shared pool --> Command Dispatch
//!   Version | Options | Inis | Print | Get
//! ```

use std::process::ExitCode;

use environ_rs::cli::global::GlobalOptions;
use environ_rs::cli::{self, Command};
use environ_rs::cmd::config::{run_inis_command, run_options_command};
use environ_rs::cmd::env::{run_get_command, run_print_command};
use environ_rs::config::Config;
use environ_rs::config::loader::ConfigLoader;
use environ_rs::env::EnvPool;
use environ_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if !EnvPool::init_shared(config.pool) {
        tracing::warn!("shared env pool was created before configuration, [pool] settings ignored");
    }

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_json_file(config.global.json_log)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let assignments = &cli.global.assignments;

    let result: environ_rs::error::Result<()> = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => run_options_command(config).map_err(Into::into),
        Some(Command::Inis) => {
            run_inis_command(&build_config_loader(&cli.global).format_loaded_files())
                .map_err(Into::into)
        }
        Some(Command::Print(args)) => {
            run_print_command(args, config, assignments).map_err(Into::into)
        }
        Some(Command::Get(args)) => run_get_command(args, config, assignments).map_err(Into::into),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_ini {
        loader = loader.add_toml_file_optional("environ.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("ENVIRON")
}

fn load_config(global: &GlobalOptions) -> environ_rs::error::Result<Config> {
    global.apply_overrides(build_config_loader(global))?.build()
}
