// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   resolve, status, config (options / inis)
//! ```

pub mod config;
pub mod resolve;
pub mod status;

#[cfg(test)]
mod tests;
