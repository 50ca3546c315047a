//! Configuration loading with precedence handling.
//!
//! Platform-level knobs live in `~/.config/dfv/config.toml`: which
//! discussion provider serves the course, the desktop breakpoint, whether
//! in-context discussions are enabled, and the tracing log path. Missing
//! file means defaults; a file that exists but cannot be read or parsed is
//! an error.

use crate::model::DiscussionProvider;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("Failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields optional; unset fields fall back to hardcoded defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Discussion backend for this deployment.
    #[serde(default)]
    pub provider: Option<DiscussionProvider>,

    /// Minimum viewport width (px) classified as desktop.
    #[serde(default)]
    pub desktop_breakpoint: Option<u16>,

    /// In-context discussions enabled for the course.
    #[serde(default)]
    pub enable_in_context: Option<bool>,

    /// Mark threads read when fetching them.
    #[serde(default)]
    pub mark_read: Option<bool>,

    /// Path for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after merging the file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Discussion backend for this deployment.
    pub provider: DiscussionProvider,
    /// Minimum viewport width (px) classified as desktop.
    pub desktop_breakpoint: u16,
    /// In-context discussions enabled for the course.
    pub enable_in_context: bool,
    /// Mark threads read when fetching them.
    pub mark_read: bool,
    /// Path for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: DiscussionProvider::Modern,
            desktop_breakpoint: 992,
            enable_in_context: false,
            mark_read: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Default tracing log path, `~/.local/state/dfv/dfv.log` on Unix-like
/// systems. Falls back to the current directory when no state directory can
/// be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dfv").join("dfv.log")
    } else {
        PathBuf::from("dfv.log")
    }
}

/// Default config file path, `~/.config/dfv/config.toml` on Unix. `None`
/// when the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dfv").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// `Ok(None)` when the file does not exist - defaults apply. `Err` only
/// when an existing file cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Highest to lowest: explicit `config_path` argument, the `DFV_CONFIG`
/// environment variable, then the default path. A missing file at any of
/// these is not an error.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }
    if let Ok(env_path) = std::env::var("DFV_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }
    Ok(None)
}

/// Merge a loaded config file over the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> AppConfig {
    let defaults = AppConfig::default();
    let Some(config) = config_file else {
        return defaults;
    };
    AppConfig {
        provider: config.provider.unwrap_or(defaults.provider),
        desktop_breakpoint: config
            .desktop_breakpoint
            .unwrap_or(defaults.desktop_breakpoint),
        enable_in_context: config.enable_in_context.unwrap_or(defaults.enable_in_context),
        mark_read: config.mark_read.unwrap_or(defaults.mark_read),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}
