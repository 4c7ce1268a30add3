// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `resolve` and `status` commands.
//!
//! ```text
//! resolve [-p NAME] [--source]   overrides resolve.platform / resolve.source
//! status  [-p NAME] [--json]     offline report, no network
//! ```

use clap::Args;

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Platform tag used to pick binary packages, defaults to `resolve.platform`.
    #[arg(short = 'p', long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Checks out sources for every submodule instead of installing packages.
    #[arg(long)]
    pub source: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Platform whose package marker is checked.
    #[arg(short = 'p', long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Prints the report as JSON.
    #[arg(long)]
    pub json: bool,
}
