// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Binary mode: the dependency becomes an unpacked platform package.
//!
//! ```text
//! {folder}/{platform}/.pkg or {folder}/.git exists ---> done
//!        |
//!        v
//! empty {folder}/{platform}; mark {folder} ignored
//!        |
//!        +-- ref not in index[1..] -----------------> source mode
//!        v
//! GET {uri}/{ref}/platforms
//!        +-- platform not listed -------------------> source mode
//!        v
//! GET {uri}/{ref}/{platform}.tar.gz
//! gunzip + untar into {folder}/{platform}; touch .pkg
//! ```

use tracing::{debug, info};

use super::archive::extract_tar_gz;
use super::index::{self, PlatformManifest, RemoteIndex};
use super::source::resolve_source;
use super::{
    PACKAGE_MARKER, ResolveContext, SOURCE_MARKER, SubmoduleReference, remove_dir_if_exists,
};
use crate::error::{FsError, SubmodResult};
use crate::git::ledger::mark_ignored;

/// Install the `platform` package for `reference`, or fall back to a source
/// checkout when none is published.
///
/// # Errors
///
/// Returns a `NetworkError` if the manifest or archive cannot be fetched, an
/// `ExtractError` for a corrupt archive, or whatever the source fallback
/// returns.
pub async fn resolve_binary(
    ctx: &ResolveContext<'_>,
    reference: &SubmoduleReference,
    platform: &str,
    index: &RemoteIndex,
) -> SubmodResult<()> {
    let folder = ctx.folder(reference);
    let target = folder.join(platform);
    if target.join(PACKAGE_MARKER).exists() {
        debug!(target = %target.display(), "package already installed");
        return Ok(());
    }
    // A checkout from an earlier fallback; the platform folder may be tracked.
    if folder.join(SOURCE_MARKER).exists() {
        debug!(folder = %folder.display(), "source checkout already present");
        return Ok(());
    }

    remove_dir_if_exists(&target)?;
    tokio::fs::create_dir_all(&target)
        .await
        .map_err(|e| FsError::io(&target, e))?;
    mark_ignored(&folder)?;

    let git_ref = reference.git_ref.as_str();
    if !index.publishes(git_ref) {
        info!(git_ref, "no package published for ref, using source");
        return resolve_source(ctx, reference, index.source_uri());
    }

    let manifest_uri = index::platforms_uri(&reference.uri, git_ref);
    let manifest = PlatformManifest::from_lines(ctx.fetcher().fetch_lines(&manifest_uri).await?);
    if !manifest.contains(platform) {
        info!(git_ref, platform, "no package for platform, using source");
        return resolve_source(ctx, reference, index.source_uri());
    }

    let package_uri = index::package_uri(&reference.uri, git_ref, platform);
    info!(package = %package_uri, "downloading package");
    let data = ctx.fetcher().fetch_binary(&package_uri).await?;
    extract_tar_gz(&data, &target)?;

    let marker = target.join(PACKAGE_MARKER);
    tokio::fs::File::create(&marker)
        .await
        .map_err(|e| FsError::io(&marker, e))?;
    Ok(())
}
