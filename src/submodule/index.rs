// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Index protocol documents and URIs.
//!
//! ```text
//! GET {base}/index                    line 0: canonical source URI
//!                                     line 1..: refs with packages
//! GET {base}/{ref}/platforms          one platform per line
//! GET {base}/{ref}/{platform}.tar.gz  gzip'd tar package
//! ```

use std::collections::BTreeSet;

use crate::error::{IndexError, SubmodResult};

fn join(base: &str, tail: &str) -> String {
    format!("{}/{tail}", base.trim_end_matches('/'))
}

#[must_use]
pub fn index_uri(base: &str) -> String {
    join(base, "index")
}

#[must_use]
pub fn platforms_uri(base: &str, git_ref: &str) -> String {
    join(base, &format!("{git_ref}/platforms"))
}

#[must_use]
pub fn package_uri(base: &str, git_ref: &str, platform: &str) -> String {
    join(base, &format!("{git_ref}/{platform}.tar.gz"))
}

/// A fetched `index` document. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIndex {
    lines: Vec<String>,
}

impl RemoteIndex {
    /// Wrap the lines fetched from `uri`.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Empty` if `lines` is empty.
    pub fn from_lines(uri: &str, lines: Vec<String>) -> SubmodResult<Self> {
        if lines.is_empty() {
            return Err(IndexError::Empty {
                uri: uri.to_string(),
            }
            .into());
        }
        Ok(Self { lines })
    }

    /// Canonical version-control location of the dependency.
    #[must_use]
    pub fn source_uri(&self) -> &str {
        &self.lines[0]
    }

    /// Refs for which binary packages are published.
    #[must_use]
    pub fn published_refs(&self) -> &[String] {
        &self.lines[1..]
    }

    #[must_use]
    pub fn publishes(&self, git_ref: &str) -> bool {
        self.published_refs().iter().any(|r| r == git_ref)
    }
}

/// Platforms a package exists for, for one published ref.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformManifest {
    platforms: BTreeSet<String>,
}

impl PlatformManifest {
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            platforms: lines.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, platform: &str) -> bool {
        self.platforms.contains(platform)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(String::as_str)
    }
}
