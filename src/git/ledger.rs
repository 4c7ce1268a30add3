// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exclude-file ledger for managed folders.
//!
//! ```text
//! folder ──walk up──> <root>/.git/          (first ancestor with a .git dir)
//!                        info/exclude       one managed path per line
//!
//! mark_ignored(folder)    append "deps/lib"
//! unmark_ignored(folder)  drop first "deps/lib"
//! no repository root      both are no-ops
//! ```
//!
//! Every edit is a full read-modify-write of the exclude file. There is no
//! locking: resolution runs sequentially in a single process.

use crate::error::{FsError, SubmodResult};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// Name of the repository marker directory.
pub const VCS_DIR: &str = ".git";

/// The exclude list of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreLedger {
    root: PathBuf,
}

impl IgnoreLedger {
    /// Find the nearest enclosing repository of `folder`, starting at `folder`
    /// itself. Returns `None` when the filesystem root is reached first.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if `folder` cannot be made absolute.
    pub fn discover(folder: &Path) -> SubmodResult<Option<Self>> {
        let start = std::path::absolute(folder).map_err(|e| FsError::io(folder, e))?;
        let root = start
            .ancestors()
            .find(|dir| dir.join(VCS_DIR).is_dir())
            .map(Path::to_path_buf);
        trace!(folder = %start.display(), root = ?root, "repository root lookup");
        Ok(root.map(|root| Self { root }))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/.git/info/exclude`.
    #[must_use]
    pub fn exclude_path(&self) -> PathBuf {
        self.root.join(VCS_DIR).join("info").join("exclude")
    }

    /// The ledger entry for `folder`: its path relative to the repository
    /// root, `/`-separated. Folders outside the root are recorded as given.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if `folder` cannot be made absolute.
    pub fn entry_for(&self, folder: &Path) -> SubmodResult<String> {
        let absolute = std::path::absolute(folder).map_err(|e| FsError::io(folder, e))?;
        let relative = absolute.strip_prefix(&self.root).unwrap_or(folder);
        let parts: Vec<_> = relative
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(parts.join("/"))
    }

    /// Current lines of the exclude file; a missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the file exists but cannot be read.
    pub fn entries(&self) -> SubmodResult<Vec<String>> {
        let path = self.exclude_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(FsError::io(&path, e).into()),
        }
    }

    /// Rewrite the exclude file in full with `lines`.
    fn store(&self, lines: &[String]) -> SubmodResult<()> {
        let path = self.exclude_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
        }
        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        std::fs::write(&path, content).map_err(|e| FsError::io(&path, e))?;
        Ok(())
    }

    /// Append the entry for `folder`. Repeated marks append repeated lines.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the exclude file cannot be read or written.
    pub fn mark(&self, folder: &Path) -> SubmodResult<()> {
        let entry = self.entry_for(folder)?;
        let mut lines = self.entries()?;
        lines.push(entry.clone());
        self.store(&lines)?;
        debug!(entry, exclude = %self.exclude_path().display(), "marked ignored");
        Ok(())
    }

    /// Remove the first line equal to the entry for `folder`, if any.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the exclude file cannot be read or written.
    pub fn unmark(&self, folder: &Path) -> SubmodResult<()> {
        let entry = self.entry_for(folder)?;
        let mut lines = self.entries()?;
        if let Some(pos) = lines.iter().position(|line| *line == entry) {
            lines.remove(pos);
        }
        self.store(&lines)?;
        debug!(entry, exclude = %self.exclude_path().display(), "unmarked ignored");
        Ok(())
    }
}

/// Hide `folder` from its enclosing repository. No-op outside a repository.
///
/// # Errors
///
/// Returns an `FsError` if the exclude file cannot be read or written.
pub fn mark_ignored(folder: &Path) -> SubmodResult<()> {
    match IgnoreLedger::discover(folder)? {
        Some(ledger) => ledger.mark(folder),
        None => Ok(()),
    }
}

/// Make `folder` visible to its enclosing repository again. No-op outside a
/// repository.
///
/// # Errors
///
/// Returns an `FsError` if the exclude file cannot be read or written.
pub fn unmark_ignored(folder: &Path) -> SubmodResult<()> {
    match IgnoreLedger::discover(folder)? {
        Some(ledger) => ledger.unmark(folder),
        None => Ok(()),
    }
}
