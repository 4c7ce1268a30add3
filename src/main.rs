// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Resolve | Status | Options | Inis | Version
//! ```

use std::process::ExitCode;

use submod_rs::cli::global::GlobalOptions;
use submod_rs::cli::{self, Command};
use submod_rs::cmd::config::{run_inis_command, run_options_command};
use submod_rs::cmd::resolve::run_resolve_command;
use submod_rs::cmd::status::run_status_command;
use submod_rs::config::loader::ConfigLoader;
use submod_rs::config::{Config, DEFAULT_CONFIG_FILE};
use submod_rs::logging::init_logging;
use submod_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Configuration together with the files it was read from.
struct Loaded {
    config: Config,
    files: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loaded = load_config(&cli.global);

    let log_config = build_log_config(&cli.global, loaded.as_ref().ok());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, loaded).await
}

fn build_log_config(global: &GlobalOptions, loaded: Option<&Loaded>) -> LogConfig {
    let Some(Loaded { config, .. }) = loaded else {
        let console_level = global
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::INFO);
        return LogConfig::builder()
            .with_console_level(console_level)
            .build();
    };

    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, loaded: submod_rs::error::Result<Loaded>) -> ExitCode {
    let result = match (&cli.command, loaded) {
        (None, _) => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
        (Some(_), Err(e)) => Err(e.context("failed to load config")),
        (Some(command), Ok(Loaded { config, files })) => match command {
            Command::Version => {
                handle_version_command();
                Ok(())
            }
            Command::Options => {
                run_options_command(&config);
                Ok(())
            }
            Command::Inis => {
                run_inis_command(&files);
                Ok(())
            }
            Command::Resolve(args) => run_resolve_command(args, &config).await,
            Command::Status(args) => run_status_command(args, &config),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("SUBMOD")
}

fn load_config(global: &GlobalOptions) -> submod_rs::error::Result<Loaded> {
    let loader = build_config_loader(global).with_overrides(&global.to_config_overrides())?;
    let files = loader.format_loaded_files();
    let config = loader.build()?;
    Ok(Loaded { config, files })
}
