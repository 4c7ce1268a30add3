// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package extraction.
//!
//! ```text
//! bytes --> GzDecoder --> tar::Archive --> unpack(dest)
//! ```
//!
//! Entries that would land outside `dest` (absolute paths, `..`) are skipped
//! by `tar` itself.

use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::error::{ExtractError, SubmodResult};

/// Decompress a `.tar.gz` payload and unpack it into `dest`.
///
/// # Errors
///
/// Returns `ExtractError::Unpack` if the gzip or tar stream is corrupt, or an
/// entry cannot be written.
pub fn extract_tar_gz(data: &[u8], dest: &Path) -> SubmodResult<()> {
    let unpack_error = |source: std::io::Error| ExtractError::Unpack {
        dest: dest.display().to_string(),
        source,
    };

    let mut archive = Archive::new(GzDecoder::new(data));
    archive.set_overwrite(true);
    archive.unpack(dest).map_err(unpack_error)?;

    debug!(dest = %dest.display(), bytes = data.len(), "package unpacked");
    Ok(())
}
