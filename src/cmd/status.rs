// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status command implementation for submod-rs.

use serde::Serialize;

use crate::cli::resolve::StatusArgs;
use crate::config::{Config, validate_platform};
use crate::error::Result;
use crate::submodule::{ResolutionState, resolution_state};

/// One row of the status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub uri: String,
    pub folder: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub state: ResolutionState,
}

/// Inspect every declared submodule on disk for `platform`.
#[must_use]
pub fn collect_status(config: &Config, platform: &str) -> Vec<StatusEntry> {
    config
        .submodules
        .iter()
        .map(|reference| StatusEntry {
            uri: reference.uri.clone(),
            folder: reference.folder_arg(),
            git_ref: reference.git_ref.clone(),
            state: resolution_state(&config.resolve.root, reference, platform),
        })
        .collect()
}

/// Render `entries` as pretty JSON or as an aligned table.
///
/// # Errors
///
/// Returns an error if the JSON report cannot be serialized.
pub fn render_status(entries: &[StatusEntry], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(entries)?);
    }
    if entries.is_empty() {
        return Ok("No submodules declared".to_string());
    }

    let width = entries.iter().map(|e| e.folder.len()).max().unwrap_or(0);
    let rows: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{:<width$}  {:<10}  {} @ {}",
                entry.folder, entry.state, entry.uri, entry.git_ref
            )
        })
        .collect();
    Ok(rows.join("\n"))
}

/// Main handler for status command.
///
/// # Errors
///
/// Returns an error for a platform that is not a single directory name, or
/// if the JSON report cannot be serialized.
pub fn run_status_command(args: &StatusArgs, config: &Config) -> Result<()> {
    let platform = args
        .platform
        .as_deref()
        .unwrap_or(&config.resolve.platform);
    validate_platform(platform)?;
    let entries = collect_status(config, platform);
    println!("{}", render_status(&entries, args.json)?);
    Ok(())
}
