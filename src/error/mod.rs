// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              SubmodError (16 bytes)
//!                       |
//!   +--------+------+---+----+--------+------+
//!   |        |      |        |        |      |
//!   v        v      v        v        v      v
//! Index  Network   Git   Extract   Config   Fs
//!  Box     Box     Box     Box      Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Index    Empty
//!   Network  Reqwest, HttpError, InvalidUrl, Timeout
//!   Git      CommandFailed, Unavailable
//!   Extract  Unpack
//!   Config   InvalidValue
//!   Fs       IoError
//!
//! All variants boxed => SubmodError is a tagged pointer.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SubmodError`].
pub type SubmodResult<T> = std::result::Result<T, SubmodError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum SubmodError {
    /// Remote index is empty or malformed.
    #[error("index error: {0}")]
    Index(#[from] Box<IndexError>),

    /// Fetching an index, manifest or archive failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Version-control invocation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Package archive could not be unpacked.
    #[error("extraction error: {0}")]
    Extract(#[from] Box<ExtractError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SubmodError {
                fn from(err: $error) -> Self {
                    SubmodError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    IndexError => Index,
    NetworkError => Network,
    GitError => Git,
    ExtractError => Extract,
    ConfigError => Config,
    FsError => Fs,
}

// --- Index Errors ---

/// Remote index errors.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index document had no usable lines.
    #[error("the submodule index at {uri} is empty")]
    Empty { uri: String },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("request to {url} failed: {source}")]
    Reqwest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Connection or read timeout.
    #[error("connection timeout: {url}")]
    Timeout { url: String },
}

impl NetworkError {
    /// Classify a reqwest failure for `url`, keeping timeouts distinct.
    #[must_use]
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Reqwest {
                url: url.to_string(),
                source,
            }
        }
    }
}

// --- Git Errors ---

/// Version-control errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Git executable could not be found or started.
    #[error("git is unavailable: {message}")]
    Unavailable { message: String },
}

// --- Extraction Errors ---

/// Package archive errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The gzip or tar stream is corrupt, or an entry could not be written.
    #[error("failed to unpack archive into '{dest}': {source}")]
    Unpack {
        dest: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
