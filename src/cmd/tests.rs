// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use tempfile::TempDir;

use super::resolve::run_resolve_command;
use super::status::{StatusEntry, collect_status, render_status, run_status_command};
use crate::cli::resolve::{ResolveArgs, StatusArgs};
use crate::config::Config;
use crate::submodule::{ResolutionState, SubmoduleReference};

fn config_in(temp: &TempDir) -> Config {
    let mut config = Config::default();
    config.resolve.root = temp.path().to_path_buf();
    config.resolve.platform = "linux".to_string();
    config.submodules = vec![
        SubmoduleReference::new("https://h/lib", "deps/lib", "v1"),
        SubmoduleReference::new("https://h/zlib", "deps/zlib-ng", "v1.3"),
    ];
    config
}

// =============================================================================
// status
// =============================================================================

#[test]
fn test_collect_status_reads_markers() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp.path().join("deps/lib")).unwrap();
    fs::write(temp.path().join("deps/lib/.git"), "gitdir: ../../.git/modules/lib\n").unwrap();
    let config = config_in(&temp);

    let entries = collect_status(&config, "linux");

    assert_eq!(
        entries,
        [
            StatusEntry {
                uri: "https://h/lib".to_string(),
                folder: "deps/lib".to_string(),
                git_ref: "v1".to_string(),
                state: ResolutionState::Source,
            },
            StatusEntry {
                uri: "https://h/zlib".to_string(),
                folder: "deps/zlib-ng".to_string(),
                git_ref: "v1.3".to_string(),
                state: ResolutionState::Unresolved,
            },
        ]
    );
}

#[test]
fn test_status_json_uses_ref_and_lowercase_state() {
    let temp = tempfile::tempdir().unwrap();
    let target = temp.path().join("deps/lib/linux");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join(".pkg"), "").unwrap();
    let config = config_in(&temp);

    let json = render_status(&collect_status(&config, "linux"), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            { "uri": "https://h/lib", "folder": "deps/lib", "ref": "v1", "state": "binary" },
            { "uri": "https://h/zlib", "folder": "deps/zlib-ng", "ref": "v1.3", "state": "unresolved" },
        ])
    );
}

#[test]
fn test_status_table_aligns_columns() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_in(&temp);

    let table = render_status(&collect_status(&config, "linux"), false).unwrap();

    assert_eq!(
        table.lines().collect::<Vec<_>>(),
        [
            "deps/lib      unresolved  https://h/lib @ v1",
            "deps/zlib-ng  unresolved  https://h/zlib @ v1.3",
        ]
    );
}

#[test]
fn test_status_without_submodules() {
    assert_eq!(render_status(&[], false).unwrap(), "No submodules declared");
    assert_eq!(render_status(&[], true).unwrap(), "[]");
}

#[test]
fn test_status_rejects_platform_outside_folder() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_in(&temp);

    for platform in ["..", "", "linux/x64"] {
        let args = StatusArgs {
            platform: Some(platform.to_string()),
            json: true,
        };
        assert!(run_status_command(&args, &config).is_err(), "for {platform:?}");
    }
}

// =============================================================================
// resolve
// =============================================================================

#[tokio::test(flavor = "current_thread")]
async fn test_resolve_rejects_parent_platform_before_touching_disk() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp.path().join(".git")).unwrap();
    let sibling = temp.path().join("deps/other/src.c");
    fs::create_dir_all(sibling.parent().unwrap()).unwrap();
    fs::write(&sibling, "int main(void) { return 0; }\n").unwrap();
    let config = config_in(&temp);

    let args = ResolveArgs {
        platform: Some("..".to_string()),
        source: false,
    };
    let err = run_resolve_command(&args, &config).await.unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'platform' in section '[resolve]': must be a single directory name, got '..'"
    );
    assert!(sibling.is_file());
    assert!(!temp.path().join("deps/lib").exists());
}
