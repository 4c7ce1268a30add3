// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule resolution engine.
//!
//! ```text
//! SubmoduleResolver::resolve_all(refs, platform, want_source)
//!   for each reference, in declared order, fail-fast:
//!        |
//!        +-- marker present? -----------------> done (no network)
//!        |
//!        v
//!   GET {uri}/index --> RemoteIndex (empty -> IndexError)
//!        |
//!        +-- want_source --> source::resolve_source
//!        |                     .git marker, git submodule add/checkout
//!        |
//!        +-- otherwise ----> binary::resolve_binary
//!                              {folder}/{platform}/.pkg marker
//!                              ref or platform unpublished -> source
//! ```
//!
//! Side effects land under `<root>/<folder>` and in the enclosing
//! repository's `.git/info/exclude` (see [`crate::git::ledger`]).

pub mod archive;
pub mod binary;
pub mod index;
pub mod source;

#[cfg(test)]
mod test_utils;

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{validate_folder, validate_platform};
use crate::error::{FsError, SubmodResult};
use crate::git::backend::VersionControl;
use crate::net::IndexFetcher;

use index::RemoteIndex;

/// Marker proving a source checkout (a file for registered submodules).
pub const SOURCE_MARKER: &str = ".git";

/// Zero-byte marker written once a package is unpacked.
pub const PACKAGE_MARKER: &str = ".pkg";

/// One declared external dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmoduleReference {
    /// Index root; `{uri}/index` must exist.
    pub uri: String,
    /// Target folder, relative to the declaring module root.
    pub folder: PathBuf,
    /// Commit, branch or tag; also the published package ref.
    #[serde(rename = "ref")]
    pub git_ref: String,
}

impl SubmoduleReference {
    #[must_use]
    pub fn new(uri: impl Into<String>, folder: impl Into<PathBuf>, git_ref: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            folder: folder.into(),
            git_ref: git_ref.into(),
        }
    }

    /// The folder as git expects it on the command line: `/`-separated.
    #[must_use]
    pub fn folder_arg(&self) -> String {
        let parts: Vec<_> = self
            .folder
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.join("/")
    }
}

/// How a reference is currently materialized on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionState {
    /// `{folder}/.git` exists.
    Source,
    /// `{folder}/{platform}/.pkg` exists.
    Binary,
    Unresolved,
}

impl std::fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Source => "source",
            Self::Binary => "binary",
            Self::Unresolved => "unresolved",
        })
    }
}

/// Collaborators shared by both strategies.
pub struct ResolveContext<'a> {
    root: PathBuf,
    fetcher: &'a dyn IndexFetcher,
    git: &'a dyn VersionControl,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        fetcher: &'a dyn IndexFetcher,
        git: &'a dyn VersionControl,
    ) -> Self {
        Self {
            root: root.into(),
            fetcher,
            git,
        }
    }

    /// Root of the declaring module; git commands without a folder run here.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn fetcher(&self) -> &'a dyn IndexFetcher {
        self.fetcher
    }

    #[must_use]
    pub fn git(&self) -> &'a dyn VersionControl {
        self.git
    }

    /// Absolute-or-root-relative location of `reference`'s folder.
    #[must_use]
    pub fn folder(&self, reference: &SubmoduleReference) -> PathBuf {
        self.root.join(&reference.folder)
    }
}

/// Entry point: resolves every declared reference, one at a time.
pub struct SubmoduleResolver<'a> {
    ctx: ResolveContext<'a>,
}

impl<'a> SubmoduleResolver<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        fetcher: &'a dyn IndexFetcher,
        git: &'a dyn VersionControl,
    ) -> Self {
        Self {
            ctx: ResolveContext::new(root, fetcher, git),
        }
    }

    #[must_use]
    pub const fn context(&self) -> &ResolveContext<'a> {
        &self.ctx
    }

    /// Inspect the filesystem only; never touches the network.
    #[must_use]
    pub fn state(&self, reference: &SubmoduleReference, platform: &str) -> ResolutionState {
        resolution_state(self.ctx.root(), reference, platform)
    }

    /// Source mode needs a checkout. In binary mode a fallback checkout
    /// counts as resolved too.
    fn is_resolved(&self, reference: &SubmoduleReference, platform: &str, want_source: bool) -> bool {
        if want_source {
            self.ctx.folder(reference).join(SOURCE_MARKER).exists()
        } else {
            self.state(reference, platform) != ResolutionState::Unresolved
        }
    }

    /// Resolve `references` in declared order. The first failure aborts the
    /// remaining references.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a platform that is not a single
    /// directory name, otherwise propagates the first index, network, git,
    /// extraction or filesystem error encountered.
    pub async fn resolve_all(
        &self,
        references: &[SubmoduleReference],
        platform: &str,
        want_source: bool,
    ) -> SubmodResult<()> {
        validate_platform(platform)?;
        if references.is_empty() {
            info!("no submodules declared");
            return Ok(());
        }

        let mode = if want_source { "source" } else { "binary" };
        info!(count = references.len(), mode, platform, "starting submodule resolution");

        for reference in references {
            info!(
                uri = %reference.uri,
                folder = %reference.folder.display(),
                git_ref = %reference.git_ref,
                mode,
                "resolving submodule"
            );
            self.resolve(reference, platform, want_source).await?;
            info!(
                folder = %reference.folder.display(),
                state = %self.state(reference, platform),
                "submodule resolved"
            );
        }

        info!("submodule resolution complete");
        Ok(())
    }

    /// Resolve a single reference.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a folder outside the module
    /// root, `IndexError::Empty` for an empty index, otherwise propagates
    /// strategy errors unchanged.
    pub async fn resolve(
        &self,
        reference: &SubmoduleReference,
        platform: &str,
        want_source: bool,
    ) -> SubmodResult<()> {
        validate_folder("submodule", &reference.folder)?;
        if self.is_resolved(reference, platform, want_source) {
            debug!(folder = %reference.folder.display(), "already resolved");
            return Ok(());
        }

        let index_uri = index::index_uri(&reference.uri);
        let lines = self.ctx.fetcher().fetch_lines(&index_uri).await?;
        let index = RemoteIndex::from_lines(&index_uri, lines)?;
        debug!(
            source = index.source_uri(),
            published = index.published_refs().len(),
            "index fetched"
        );

        let folder = self.ctx.folder(reference);
        tokio::fs::create_dir_all(&folder)
            .await
            .map_err(|e| FsError::io(&folder, e))?;

        if want_source {
            source::resolve_source(&self.ctx, reference, index.source_uri())
        } else {
            binary::resolve_binary(&self.ctx, reference, platform, &index).await
        }
    }
}

/// How `reference` is materialized under `root` for `platform`. A package
/// for `platform` wins over a source checkout.
#[must_use]
pub fn resolution_state(
    root: &Path,
    reference: &SubmoduleReference,
    platform: &str,
) -> ResolutionState {
    let folder = root.join(&reference.folder);
    if folder.join(platform).join(PACKAGE_MARKER).exists() {
        ResolutionState::Binary
    } else if folder.join(SOURCE_MARKER).exists() {
        ResolutionState::Source
    } else {
        ResolutionState::Unresolved
    }
}

/// Remove `path` and everything under it; a missing path is fine.
pub(crate) fn remove_dir_if_exists(path: &Path) -> SubmodResult<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::io(path, e).into()),
    }
}
