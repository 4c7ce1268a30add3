// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory collaborators for resolver tests.
//!
//! `FakeFetcher` serves canned documents and records every URI requested.
//! `FakeGit` records command lines and creates the `.git` files that real
//! `git submodule` commands would leave behind.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use flate2::Compression;
use flate2::write::GzEncoder;
use futures_util::future::BoxFuture;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{GitError, NetworkError, SubmodResult};
use crate::git::backend::VersionControl;
use crate::net::{IndexFetcher, split_lines};

#[derive(Default)]
pub(super) struct FakeFetcher {
    documents: BTreeMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub(super) fn with_text(mut self, uri: &str, text: &str) -> Self {
        self.documents
            .insert(uri.to_string(), text.as_bytes().to_vec());
        self
    }

    pub(super) fn with_bytes(mut self, uri: &str, bytes: Vec<u8>) -> Self {
        self.documents.insert(uri.to_string(), bytes);
        self
    }

    pub(super) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn serve(&self, uri: &str) -> SubmodResult<Vec<u8>> {
        self.requests.lock().unwrap().push(uri.to_string());
        self.documents.get(uri).cloned().ok_or_else(|| {
            NetworkError::HttpError {
                status: 404,
                url: uri.to_string(),
            }
            .into()
        })
    }
}

impl IndexFetcher for FakeFetcher {
    fn fetch_lines<'a>(&'a self, uri: &'a str) -> BoxFuture<'a, SubmodResult<Vec<String>>> {
        Box::pin(async move {
            let bytes = self.serve(uri)?;
            Ok(split_lines(&String::from_utf8_lossy(&bytes)))
        })
    }

    fn fetch_binary<'a>(&'a self, uri: &'a str) -> BoxFuture<'a, SubmodResult<Vec<u8>>> {
        Box::pin(async move { self.serve(uri) })
    }
}

pub(super) struct FakeGit {
    root: PathBuf,
    calls: Mutex<Vec<String>>,
    registered: Option<PathBuf>,
    fail_on: Option<String>,
}

impl FakeGit {
    pub(super) fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            calls: Mutex::new(Vec::new()),
            registered: None,
            fail_on: None,
        }
    }

    /// `submodule update` in the root restores a checkout of `folder`.
    pub(super) fn with_registered(mut self, folder: &str) -> Self {
        self.registered = Some(self.root.join(folder));
        self
    }

    /// Any command line containing `needle` fails.
    pub(super) fn failing_on(mut self, needle: &str) -> Self {
        self.fail_on = Some(needle.to_string());
        self
    }

    /// Recorded as `"<cwd relative to root> | <args>"`.
    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn plant_checkout(folder: &Path) {
        std::fs::create_dir_all(folder).unwrap();
        std::fs::write(folder.join(".git"), "gitdir: ../.git/modules/fake\n").unwrap();
    }
}

impl VersionControl for FakeGit {
    fn run(&self, cwd: &Path, args: &[&str]) -> SubmodResult<String> {
        let line = args.join(" ");
        let rel = cwd
            .strip_prefix(&self.root)
            .ok()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| ".".to_string(), |p| p.display().to_string());
        self.calls.lock().unwrap().push(format!("{rel} | {line}"));

        if let Some(needle) = &self.fail_on
            && line.contains(needle.as_str())
        {
            return Err(GitError::CommandFailed {
                command: format!("git {line}"),
                message: "simulated failure".to_string(),
            }
            .into());
        }

        match args {
            ["submodule", "update", "--init", "--recursive"] if cwd == self.root => {
                if let Some(folder) = &self.registered {
                    Self::plant_checkout(folder);
                }
            }
            ["submodule", "add", _, folder] => Self::plant_checkout(&self.root.join(folder)),
            _ => {}
        }
        Ok(String::new())
    }
}

/// Build a `.tar.gz` holding `files`.
pub(super) fn tar_gz(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, data) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, *path, *data).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber and return what it logged at INFO.
pub(super) async fn run_with_logs<F, Fut, T>(f: F) -> (T, String)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = T>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    let output = f().await;

    let logs = String::from_utf8_lossy(&buffer.lock().unwrap()).to_string();
    (output, logs)
}
