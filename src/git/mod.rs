// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-control side of resolution.
//!
//! ```text
//!   submodule strategies
//!        |          |
//!        v          v
//!   backend      ledger
//!   VersionControl   IgnoreLedger
//!   ShellBackend     .git/info/exclude
//!   (git CLI)        (plain file edits)
//! ```

pub mod backend;
pub mod ledger;
