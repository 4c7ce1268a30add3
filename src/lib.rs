// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          resolve / status / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, env, --set layers  |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |        submodule          |
//!              |  SubmoduleResolver        |
//!              |  source / binary / index  |
//!              '----+-----------------+----'
//!                   |                 |
//!                   v                 v
//!                  git               net
//!          VersionControl,      IndexFetcher,
//!          exclude ledger        HTTP/progress
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod net;
pub mod submodule;
