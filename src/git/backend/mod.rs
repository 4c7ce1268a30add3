// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-control backend abstraction.
//!
//! ```text
//! VersionControl (trait, injected)
//!   run(cwd, args) -> stdout
//!        |
//!        v
//!   ShellBackend --> git CLI (looked up with `which` per call)
//!     GCM_INTERACTIVE=never, GIT_TERMINAL_PROMPT=0
//!     non-zero exit -> GitError::CommandFailed
//! ```

use crate::error::{GitError, SubmodResult};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs version-control commands on behalf of the resolver.
pub trait VersionControl: Send + Sync {
    /// Run one command in `cwd` and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the tool cannot be started or exits non-zero.
    fn run(&self, cwd: &Path, args: &[&str]) -> SubmodResult<String>;
}

/// Git CLI backend.
///
/// Submodule registration, checkout and staging all go through the real git
/// executable so that `.gitmodules`, the index and nested submodules stay
/// consistent with what a user would get by hand. The executable is looked
/// up on every call; a missing git only fails the commands that need it.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
}

impl ShellBackend {
    /// Backend for `program`, a bare name searched in `PATH` or a path.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the configured program to an executable path.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Unavailable` if the executable cannot be found.
    pub fn locate(&self) -> SubmodResult<PathBuf> {
        which::which(&self.program).map_err(|e| {
            GitError::Unavailable {
                message: format!("{}: {e}", self.program.display()),
            }
            .into()
        })
    }
}

impl Default for ShellBackend {
    fn default() -> Self {
        Self::new("git")
    }
}

impl VersionControl for ShellBackend {
    fn run(&self, cwd: &Path, args: &[&str]) -> SubmodResult<String> {
        let executable = self.locate()?;
        let command_line = format!("git {}", args.join(" "));
        debug!(cwd = %cwd.display(), command = %command_line, "running git");

        let output = Command::new(&executable)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| GitError::Unavailable {
                message: format!("failed to execute {}: {e}", executable.display()),
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: command_line,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests;
