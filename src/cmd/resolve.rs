// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve command implementation for submod-rs.

use anyhow::Context;

use crate::cli::resolve::ResolveArgs;
use crate::config::{Config, validate_platform};
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::net::{HttpFetcher, ProgressDisplay};
use crate::submodule::SubmoduleResolver;

/// Build the HTTP fetcher described by `[net]` and `[resolve]`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn fetcher_from_config(config: &Config) -> Result<HttpFetcher> {
    let builder = HttpFetcher::builder()
        .user_agent(config.net.user_agent.clone())
        .timeout(config.net.timeout());
    let builder = if config.resolve.progress {
        builder.progress(ProgressDisplay::Bar)
    } else {
        builder.silent()
    };
    builder.build().context("failed to create HTTP client")
}

/// Main handler for resolve command.
///
/// # Errors
///
/// Returns an error for a platform that is not a single directory name, or
/// the first resolution failure. Ctrl+C interrupts the run between steps and
/// is reported as an error.
pub async fn run_resolve_command(args: &ResolveArgs, config: &Config) -> Result<()> {
    let platform = args
        .platform
        .clone()
        .unwrap_or_else(|| config.resolve.platform.clone());
    validate_platform(&platform)?;
    let want_source = args.source || config.resolve.source;

    let fetcher = fetcher_from_config(config)?;
    let git = ShellBackend::new(&config.tools.git);
    let resolver = SubmoduleResolver::new(&config.resolve.root, &fetcher, &git);

    tokio::select! {
        result = resolver.resolve_all(&config.submodules, &platform, want_source) => {
            result.with_context(|| {
                format!("failed to resolve submodules under {}", config.resolve.root.display())
            })
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Received Ctrl+C, stopping resolution");
            anyhow::bail!("resolution interrupted")
        }
    }
}
