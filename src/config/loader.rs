//! Configuration file loading with precedence handling.

use super::DisplayMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Rows shown by the long-mode listing when nothing else is configured.
pub const DEFAULT_PROMPT_COUNT: usize = 30;

/// Largest accepted prompt count.
pub const MAX_PROMPT_COUNT: usize = i32::MAX as usize;

/// Errors that can occur while resolving configuration.
///
/// All of these are fatal and reported before the terminal is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Prompt count outside `1..=MAX_PROMPT_COUNT`.
    #[error("Invalid prompt count {0}: must be between 1 and {max}", max = MAX_PROMPT_COUNT)]
    InvalidPromptCount(usize),

    /// Display mode name other than short, line or long.
    #[error("Invalid display mode {0:?}: expected short, line or long")]
    InvalidMode(String),

    /// More directories than the scanner accepts.
    #[error("Too many paths: {count} directories given, at most {max} allowed")]
    TooManyDirectories {
        /// Directories after merging arguments and `PATH`.
        count: usize,
        /// The configured limit.
        max: usize,
    },

    /// A directory string longer than the accepted maximum.
    #[error("Directory path is {len} bytes long, at most {max} allowed: {path}")]
    DirectoryTooLong {
        /// The offending directory.
        path: PathBuf,
        /// Its length in bytes.
        len: usize,
        /// The configured limit.
        max: usize,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/aelist/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Display mode: "short", "line" or "long".
    #[serde(default)]
    pub mode: Option<DisplayMode>,

    /// Rows in the long-mode listing.
    #[serde(default)]
    pub prompt_count: Option<usize>,

    /// Hide the load banner.
    #[serde(default)]
    pub skip_banner: Option<bool>,

    /// Always append `PATH` directories, even when directories are given.
    #[serde(default)]
    pub include_path: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Display mode.
    pub mode: DisplayMode,
    /// Rows in the long-mode listing.
    pub prompt_count: usize,
    /// Hide the load banner.
    pub skip_banner: bool,
    /// Append `PATH` directories to explicit ones.
    pub include_path: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            prompt_count: DEFAULT_PROMPT_COUNT,
            skip_banner: false,
            include_path: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/aelist/aelist.log` on Linux. Falls back to the
/// current directory if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("aelist").join("aelist.log")
    } else {
        PathBuf::from("aelist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/aelist/config.toml` on Linux, `None` if no config
/// directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aelist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `AELIST_CONFIG` environment variable
/// 3. Default path `~/.config/aelist/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os("AELIST_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPromptCount`] when the file sets a prompt
/// count outside `1..=MAX_PROMPT_COUNT`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let prompt_count = match config.prompt_count {
        Some(count) => validate_prompt_count(count)?,
        None => defaults.prompt_count,
    };

    Ok(ResolvedConfig {
        mode: config.mode.unwrap_or(defaults.mode),
        prompt_count,
        skip_banner: config.skip_banner.unwrap_or(defaults.skip_banner),
        include_path: config.include_path.unwrap_or(defaults.include_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `AELIST_MODE`: Override display mode. Unknown values are logged and
///   ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(mode) = std::env::var("AELIST_MODE") {
        match mode.parse::<DisplayMode>() {
            Ok(mode) => config.mode = mode,
            Err(err) => warn!("Ignoring AELIST_MODE: {}", err),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPromptCount`] for an out-of-range prompt
/// count.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    mode_override: Option<DisplayMode>,
    prompt_count_override: Option<usize>,
    skip_banner_override: Option<bool>,
    include_path_override: Option<bool>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(mode) = mode_override {
        config.mode = mode;
    }

    if let Some(count) = prompt_count_override {
        config.prompt_count = validate_prompt_count(count)?;
    }

    if let Some(skip_banner) = skip_banner_override {
        config.skip_banner = skip_banner;
    }

    if let Some(include_path) = include_path_override {
        config.include_path = include_path;
    }

    Ok(config)
}

fn validate_prompt_count(count: usize) -> Result<usize, ConfigError> {
    if (1..=MAX_PROMPT_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(ConfigError::InvalidPromptCount(count))
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
