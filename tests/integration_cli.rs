// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use submod_rs::cli::global::GlobalOptions;
use submod_rs::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["submod", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["submod", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["submod"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Resolve / Status Commands
// =============================================================================

#[test]
fn cli_resolve_platform_and_source() {
    let cli = Cli::try_parse_from(["submod", "resolve", "--platform", "windows", "--source"])
        .unwrap();
    match cli.command {
        Some(Command::Resolve(args)) => {
            assert_eq!(args.platform.as_deref(), Some("windows"));
            assert!(args.source);
        }
        other => panic!("Expected resolve, got {other:?}"),
    }
}

#[test]
fn cli_status_defaults() {
    let cli = Cli::try_parse_from(["submod", "status"]).unwrap();
    match cli.command {
        Some(Command::Status(args)) => {
            assert!(args.platform.is_none());
            assert!(!args.json);
        }
        other => panic!("Expected status, got {other:?}"),
    }
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["submod", "build"]).is_err());
}

#[test]
fn cli_resolve_rejects_json_flag() {
    assert!(Cli::try_parse_from(["submod", "resolve", "--json"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_after_command() {
    let cli = Cli::try_parse_from(["submod", "status", "--json"]).unwrap();
    assert!(cli.global.inis.is_empty());
    assert!(!cli.global.no_default_inis);
}

#[test]
fn cli_global_options_no_default_inis() {
    let cli = Cli::try_parse_from([
        "submod",
        "--no-default-inis",
        "--ini",
        "ci.toml",
        "--log-file",
        "submod.log",
        "options",
    ])
    .unwrap();
    assert!(cli.global.no_default_inis);
    assert_eq!(cli.global.inis.len(), 1);
    assert_eq!(
        cli.global.to_config_overrides(),
        ["global.log_file=submod.log"]
    );
}

#[test]
fn cli_global_options_to_config_overrides() {
    let opts = GlobalOptions {
        log_level: Some(4),
        root: Some(std::path::PathBuf::from("/work")),
        options: vec!["custom.key=value".to_string()],
        ..Default::default()
    };
    let overrides = opts.to_config_overrides();
    insta::assert_debug_snapshot!(overrides, @r#"
    [
        "custom.key=value",
        "global.output_log_level=4",
        "global.file_log_level=4",
        "resolve.root=/work",
    ]
    "#);
}
