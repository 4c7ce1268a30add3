// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ShellBackend, VersionControl};
use crate::error::{GitError, SubmodError};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Tests that spawn git are skipped on machines without it.
fn git() -> Option<ShellBackend> {
    let backend = ShellBackend::default();
    backend.locate().ok().map(|_| backend)
}

#[test]
fn test_missing_executable_is_unavailable() {
    let backend = ShellBackend::new("definitely-not-a-git-binary-4f1c");
    let err = backend.run(Path::new("."), &["status"]).unwrap_err();
    match err {
        SubmodError::Git(boxed) => assert!(matches!(*boxed, GitError::Unavailable { .. })),
        other => panic!("Expected SubmodError::Git, got {other:?}"),
    }
}

#[test]
fn test_run_returns_trimmed_stdout() {
    let Some(git) = git() else { return };
    let temp = temp_dir();

    git.run(temp.path(), &["init", "--quiet"]).unwrap();
    let inside = git
        .run(temp.path(), &["rev-parse", "--is-inside-work-tree"])
        .unwrap();
    assert_eq!(inside, "true");
}

#[test]
fn test_run_non_zero_exit_is_command_failed() {
    let Some(git) = git() else { return };
    let temp = temp_dir();

    let err = git
        .run(temp.path(), &["checkout", "-q", "no-such-ref"])
        .unwrap_err();
    match err {
        SubmodError::Git(boxed) => match *boxed {
            GitError::CommandFailed { command, message } => {
                assert_eq!(command, "git checkout -q no-such-ref");
                assert!(!message.is_empty());
            }
            other => panic!("Expected GitError::CommandFailed, got {other:?}"),
        },
        other => panic!("Expected SubmodError::Git, got {other:?}"),
    }
}
