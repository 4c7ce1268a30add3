// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["submod", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "submod", "-l", "4", "-d", "/work/app", "-i", "a.toml", "-i", "b.toml", "-s",
        "net.timeout_secs=5", "resolve",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.root, Some(PathBuf::from("/work/app")));
    assert_eq!(
        cli.global.inis,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "net.timeout_secs=5",
            "global.output_log_level=4",
            "global.file_log_level=4",
            "resolve.root=/work/app",
        ]
    );
}

#[test]
fn test_file_log_level_overrides_console_level() {
    let cli = Cli::try_parse_from(["submod", "-l", "2", "--file-log-level", "5", "options"])
        .unwrap();
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"global.output_log_level=2".to_string()));
    assert!(overrides.contains(&"global.file_log_level=5".to_string()));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["submod", "-l", "7", "resolve"]).is_err());
}

#[test]
fn test_parse_resolve() {
    let cli = Cli::try_parse_from(["submod", "resolve", "-p", "mac", "--source"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.platform.as_deref(), Some("mac"));
    assert!(args.source);
}

#[test]
fn test_parse_resolve_defaults() {
    let cli = Cli::try_parse_from(["submod", "resolve"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert!(args.platform.is_none());
    assert!(!args.source);
}

#[test]
fn test_parse_status_json() {
    let cli = Cli::try_parse_from(["submod", "status", "--json", "--platform", "linux"]).unwrap();
    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status command");
    };
    assert!(args.json);
    assert_eq!(args.platform.as_deref(), Some("linux"));
}
