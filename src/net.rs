// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote index client.
//!
//! ```text
//! IndexFetcher (trait, injected)
//!   fetch_lines(uri)  -> Vec<String>   index, platforms
//!   fetch_binary(uri) -> Vec<u8>       <ref>/<platform>.tar.gz
//!        |
//!        v
//!   HttpFetcher (reqwest)
//!     user agent, optional timeout
//!     non-2xx -> NetworkError::HttpError
//!     archive progress: Bar | Silent
//! ```
//!
//! Every call is a fresh GET: nothing is cached and nothing is retried.

use crate::error::{NetworkError, SubmodResult};
use futures_util::StreamExt;
use futures_util::future::BoxFuture;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Response, Url};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, trace};

/// Fetch capability used by the resolver.
///
/// Implemented over HTTP by [`HttpFetcher`]; tests substitute an in-memory
/// implementation.
pub trait IndexFetcher: Send + Sync {
    /// Fetch a newline-delimited document and return its non-empty lines.
    fn fetch_lines<'a>(&'a self, uri: &'a str) -> BoxFuture<'a, SubmodResult<Vec<String>>>;

    /// Fetch a document as raw bytes.
    fn fetch_binary<'a>(&'a self, uri: &'a str) -> BoxFuture<'a, SubmodResult<Vec<u8>>>;
}

/// Split a document on `\r` and `\n`, dropping empty lines and keeping order.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Progress display style for archive downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Progress bar when the size is known, spinner otherwise
    #[default]
    Bar,
    /// No visual progress
    Silent,
}

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} @ {binary_bytes_per_sec} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {bytes} @ {binary_bytes_per_sec}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// HTTP implementation of [`IndexFetcher`].
///
/// # Example
/// ```ignore
/// use submod_rs::net::{HttpFetcher, IndexFetcher};
///
/// let fetcher = HttpFetcher::builder().silent().build()?;
/// let lines = fetcher.fetch_lines("https://packages.example.com/lib/index").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    progress_display: ProgressDisplay,
}

/// Builder for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcherBuilder {
    user_agent: String,
    timeout: Option<Duration>,
    progress_display: ProgressDisplay,
}

impl Default for HttpFetcherBuilder {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: None,
            progress_display: ProgressDisplay::default(),
        }
    }
}

/// `submod-rs/<version>`.
#[must_use]
pub fn default_user_agent() -> String {
    format!("submod-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl HttpFetcherBuilder {
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Total per-request timeout. No timeout when unset.
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn progress(mut self, style: ProgressDisplay) -> Self {
        self.progress_display = style;
        self
    }

    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.progress_display = ProgressDisplay::Silent;
        self
    }

    /// Build the underlying reqwest client.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the TLS backend or client cannot be initialized.
    pub fn build(self) -> SubmodResult<HttpFetcher> {
        let mut builder = Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NetworkError::from_reqwest("<client>", e))?;
        Ok(HttpFetcher {
            client,
            progress_display: self.progress_display,
        })
    }
}

impl HttpFetcher {
    #[must_use]
    pub fn builder() -> HttpFetcherBuilder {
        HttpFetcherBuilder::default()
    }

    fn create_progress_bar(&self, total_size: u64) -> Option<ProgressBar> {
        match self.progress_display {
            ProgressDisplay::Silent => None,
            ProgressDisplay::Bar if total_size > 0 => {
                let pb = ProgressBar::new(total_size);
                pb.set_style(bar_style());
                Some(pb)
            }
            ProgressDisplay::Bar => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(spinner_style());
                Some(pb)
            }
        }
    }

    /// Issue a GET and fail on anything but a 2xx status.
    async fn get(&self, uri: &str) -> SubmodResult<Response> {
        let url = Url::parse(uri).map_err(|e| NetworkError::InvalidUrl(format!("{uri}: {e}")))?;
        debug!(uri, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NetworkError::from_reqwest(uri, e))?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: uri.to_string(),
            }
            .into());
        }
        Ok(response)
    }

    async fn get_lines(&self, uri: &str) -> SubmodResult<Vec<String>> {
        let text = self
            .get(uri)
            .await?
            .text()
            .await
            .map_err(|e| NetworkError::from_reqwest(uri, e))?;
        let lines = split_lines(&text);
        trace!(uri, count = lines.len(), "fetched lines");
        Ok(lines)
    }

    async fn get_binary(&self, uri: &str) -> SubmodResult<Vec<u8>> {
        let response = self.get(uri).await?;
        let total_size = response.content_length().unwrap_or(0);
        let progress_bar = self.create_progress_bar(total_size);

        let mut data = Vec::with_capacity(usize::try_from(total_size).unwrap_or(0));
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    if let Some(pb) = &progress_bar {
                        pb.abandon_with_message("failed");
                    }
                    return Err(NetworkError::from_reqwest(uri, e).into());
                }
            };
            data.extend_from_slice(&chunk);
            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }
        trace!(uri, bytes = data.len(), "fetched archive");
        Ok(data)
    }
}

impl IndexFetcher for HttpFetcher {
    fn fetch_lines<'a>(&'a self, uri: &'a str) -> BoxFuture<'a, SubmodResult<Vec<String>>> {
        Box::pin(self.get_lines(uri))
    }

    fn fetch_binary<'a>(&'a self, uri: &'a str) -> BoxFuture<'a, SubmodResult<Vec<u8>>> {
        Box::pin(self.get_binary(uri))
    }
}
