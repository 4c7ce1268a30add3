// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for submod-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! submod [global options] <command>
//! resolve [-p NAME] [--source]
//! status [-p NAME] [--json]
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::resolve::{ResolveArgs, StatusArgs};
use clap::{Parser, Subcommand};

/// Submodule Resolution Tool
///
/// Materializes declared dependencies as source checkouts or prebuilt
/// platform packages.
#[derive(Debug, Parser)]
#[command(
    name = "submod",
    author,
    version,
    about = "Submodule Resolution Tool",
    long_about = "submod-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the submodules declared in submod.toml. Each one is\n\
                  installed from a prebuilt package for the current platform when\n\
                  its index publishes one, and checked out as a git submodule\n\
                  otherwise. Use `submod resolve --source` to always check out\n\
                  sources. See `submod <command> --help` for more information.",
    after_help = "INI FILES:\n\n\
                  By default, submod loads `submod.toml` from the current directory\n\
                  if it exists. Additional files can be specified with --ini, those\n\
                  are loaded afterwards and override it. SUBMOD_<SECTION>__<KEY>\n\
                  environment variables override the files. Use --no-default-inis to\n\
                  only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by submod.
    Inis,

    /// Resolves every declared submodule.
    Resolve(ResolveArgs),

    /// Shows how each declared submodule is materialized, without network access.
    Status(StatusArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
