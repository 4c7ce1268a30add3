// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source mode: the dependency becomes a tracked git submodule.
//!
//! ```text
//! {folder}/.git exists ------------------------------> done
//!        |
//!        v
//! rm -rf {folder}; unmark {folder} in the exclude ledger
//! git submodule update --init --recursive            (root)
//!        |
//!        +-- {folder}/.git now exists ----------------> done
//!        |
//!        v   never registered before
//! git submodule add {source} {folder}                (root)
//! git checkout -q -f {ref}                           ({folder})
//! git submodule update --init --recursive            ({folder})
//! git add .gitmodules; git add {folder}              (root)
//! ```
//!
//! Source folders are never marked ignored: the checkout has to stay
//! visible to the declaring repository. A failing command aborts with the
//! folder left as the failure found it.

use tracing::{debug, info};

use super::{ResolveContext, SOURCE_MARKER, SubmoduleReference, remove_dir_if_exists};
use crate::error::SubmodResult;
use crate::git::ledger::unmark_ignored;

const UPDATE_RECURSIVE: &[&str] = &["submodule", "update", "--init", "--recursive"];

/// Make `reference` a live checkout of `source_uri` pinned to its ref.
///
/// # Errors
///
/// Returns a `GitError` if any git command fails, or an `FsError` if the
/// folder or exclude ledger cannot be modified.
pub fn resolve_source(
    ctx: &ResolveContext<'_>,
    reference: &SubmoduleReference,
    source_uri: &str,
) -> SubmodResult<()> {
    let folder = ctx.folder(reference);
    if folder.join(SOURCE_MARKER).exists() {
        debug!(folder = %folder.display(), "source checkout already present");
        return Ok(());
    }

    remove_dir_if_exists(&folder)?;
    unmark_ignored(&folder)?;

    let git = ctx.git();
    let root = ctx.root();
    git.run(root, UPDATE_RECURSIVE)?;

    if folder.join(SOURCE_MARKER).exists() {
        debug!(folder = %folder.display(), "restored registered submodule");
        return Ok(());
    }

    let folder_arg = reference.folder_arg();
    info!(
        source = source_uri,
        folder = %folder_arg,
        git_ref = %reference.git_ref,
        "registering new submodule"
    );
    git.run(root, &["submodule", "add", source_uri, &folder_arg])?;
    git.run(
        &folder,
        &[
            "-c",
            "advice.detachedHead=false",
            "checkout",
            "-q",
            "-f",
            &reference.git_ref,
        ],
    )?;
    git.run(&folder, UPDATE_RECURSIVE)?;
    git.run(root, &["add", ".gitmodules"])?;
    git.run(root, &["add", &folder_arg])?;
    Ok(())
}
