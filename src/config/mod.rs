// submod-rs: Submodule Resolution Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for submod-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. submod.toml (cwd, optional)
//! 3. --ini FILE
//! 4. SUBMOD_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SUBMOD_RESOLVE__PLATFORM=mac   → resolve.platform = "mac"
//! SUBMOD_RESOLVE__SOURCE=true    → resolve.source = true
//! SUBMOD_NET__TIMEOUT_SECS=30    → net.timeout_secs = 30
//! ```
//!
//! # Declared Submodules
//!
//! ```toml
//! [[submodules]]
//! uri = "https://packages.example.com/zlib"
//! folder = "deps/zlib"
//! ref = "v1.3.1"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::error::{ConfigError, Result};
use crate::submodule::SubmoduleReference;

use loader::ConfigLoader;
use types::{GlobalConfig, NetConfig, ResolveConfig, ToolsConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "submod.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Resolution options.
    pub resolve: ResolveConfig,
    /// HTTP options.
    pub net: NetConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Declared submodules, resolved in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submodules: Vec<SubmoduleReference>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use submod_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("submod.toml")
    ///     .with_env_prefix("SUBMOD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Reject values the resolver cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a platform that is not a single
    /// path component, or for a submodule with an empty `uri` or `ref` or a
    /// `folder` that leaves the module root.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_platform(&self.resolve.platform)?;

        for (i, reference) in self.submodules.iter().enumerate() {
            let section = format!("submodules[{i}]");
            if reference.uri.trim().is_empty() {
                return Err(invalid(&section, "uri", "must not be empty"));
            }
            validate_folder(&section, &reference.folder)?;
            if reference.git_ref.trim().is_empty() {
                return Err(invalid(&section, "ref", "must not be empty"));
            }
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`, submodules last
    /// in declared order.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_resolve_options(&mut options);
        self.format_net_options(&mut options);
        options.insert("tools.git".to_string(), self.tools.git.display().to_string());

        let submodules: Vec<(String, String)> = self
            .submodules
            .iter()
            .enumerate()
            .map(|(i, r)| {
                (
                    format!("submodules[{i}]"),
                    format!("{} -> {} @ {}", r.uri, r.folder_arg(), r.git_ref),
                )
            })
            .collect();

        let max_key_len = options
            .keys()
            .chain(submodules.iter().map(|(k, _)| k))
            .map(String::len)
            .max()
            .unwrap_or(0);

        options
            .into_iter()
            .chain(submodules)
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_resolve_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "resolve.root".into(),
            self.resolve.root.display().to_string(),
        );
        options.insert("resolve.platform".into(), self.resolve.platform.clone());
        options.insert("resolve.source".into(), self.resolve.source.to_string());
        options.insert("resolve.progress".into(), self.resolve.progress.to_string());
    }

    fn format_net_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("net.user_agent".into(), self.net.user_agent.clone());
        options.insert(
            "net.timeout_secs".into(),
            self.net
                .timeout_secs
                .map_or_else(String::new, |t| t.to_string()),
        );
    }
}

/// A platform names one directory inside each submodule folder.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` unless `platform` is exactly one
/// normal path component.
pub fn validate_platform(platform: &str) -> std::result::Result<(), ConfigError> {
    if platform.trim().is_empty() {
        return Err(invalid("resolve", "platform", "must not be empty"));
    }
    let mut components = Path::new(platform).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name.to_str() == Some(platform) => Ok(()),
        _ => Err(invalid(
            "resolve",
            "platform",
            &format!("must be a single directory name, got '{platform}'"),
        )),
    }
}

/// A submodule folder must stay inside the module root.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an empty or absolute folder, or
/// one with a `..` component.
pub fn validate_folder(section: &str, folder: &Path) -> std::result::Result<(), ConfigError> {
    if folder.as_os_str().is_empty() {
        return Err(invalid(section, "folder", "must not be empty"));
    }
    if folder.is_absolute() || folder.has_root() {
        return Err(invalid(
            section,
            "folder",
            &format!(
                "must be relative to the module root, got '{}'",
                folder.display()
            ),
        ));
    }
    if folder.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid(
            section,
            "folder",
            &format!("must not contain '..', got '{}'", folder.display()),
        ));
    }
    Ok(())
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
