//! Configuration file loading with precedence handling.

use crate::model::RoutePath;
use crate::nav::NavbarOptions;
use crate::page::SiteCatalog;
use crate::state::dropdown::{SettleStrategy, DEFAULT_SETTLE_DELAY};
use crate::state::NAVBAR_HEIGHT;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable selecting the config file.
pub const CONFIG_ENV: &str = "NEUROVERSE_NAV_CONFIG";

/// Environment variable overriding the start route.
pub const ROUTE_ENV: &str = "NEUROVERSE_NAV_ROUTE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending setting.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// When the dropdown re-measures after the bar slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SettleMode {
    /// On the bar's transition-end event.
    #[default]
    TransitionEnd,
    /// After `settle_delay_ms`.
    Delay,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/neuroverse-nav/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Navigation bar height in pixels.
    #[serde(default)]
    pub navbar_height: Option<f64>,

    /// Dropdown settle mode.
    #[serde(default)]
    pub settle: Option<SettleMode>,

    /// Settle delay for `settle = "delay"`.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,

    /// Pixels scrolled per wheel notch or `j`/`k`.
    #[serde(default)]
    pub scroll_step_px: Option<f64>,

    /// Pixels represented by one terminal row.
    #[serde(default)]
    pub px_per_row: Option<f64>,

    /// Scroll-to-top animation length.
    #[serde(default)]
    pub scroll_to_top_ms: Option<u64>,

    /// Route shown on startup.
    #[serde(default)]
    pub start_route: Option<String>,

    /// Behave as if framed by a parent page.
    #[serde(default)]
    pub embedded: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Navigation bar height in pixels.
    pub navbar_height: f64,
    /// Dropdown settle mode.
    pub settle: SettleMode,
    /// Settle delay in milliseconds.
    pub settle_delay_ms: u64,
    /// Scroll step in pixels.
    pub scroll_step_px: f64,
    /// Pixels per terminal row.
    pub px_per_row: f64,
    /// Scroll-to-top animation length in milliseconds.
    pub scroll_to_top_ms: u64,
    /// Route shown on startup.
    pub start_route: String,
    /// Framed by a parent page.
    pub embedded: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            navbar_height: NAVBAR_HEIGHT,
            settle: SettleMode::TransitionEnd,
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            scroll_step_px: 64.0,
            px_per_row: 32.0,
            scroll_to_top_ms: 2500,
            start_route: "/".to_string(),
            embedded: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Settle strategy for the dropdown positioner.
    pub fn settle_strategy(&self) -> SettleStrategy {
        match self.settle {
            SettleMode::TransitionEnd => SettleStrategy::TransitionEnd,
            SettleMode::Delay => SettleStrategy::Delay(Duration::from_millis(self.settle_delay_ms)),
        }
    }

    /// Options for mounting the navbar.
    pub fn navbar_options(&self) -> NavbarOptions {
        NavbarOptions {
            navbar_height: self.navbar_height,
            settle: self.settle_strategy(),
        }
    }

    /// Scroll-to-top animation length.
    pub fn scroll_to_top_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_to_top_ms)
    }

    /// Reject values the preview cannot work with: non-positive geometry and
    /// a start route that is malformed or has no page.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let positive = [
            ("navbar_height", self.navbar_height),
            ("scroll_step_px", self.scroll_step_px),
            ("px_per_row", self.px_per_row),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a positive number, got {value}"),
                });
            }
        }

        let start =
            RoutePath::new(self.start_route.as_str()).map_err(|err| ConfigError::InvalidValue {
                field: "start_route",
                reason: err.to_string(),
            })?;
        if !SiteCatalog::neuroverse().contains(&start) {
            return Err(ConfigError::InvalidValue {
                field: "start_route",
                reason: format!("no page at {start}"),
            });
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/neuroverse-nav/neuroverse-nav.log` on Unix-like
/// systems, or the platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("neuroverse-nav").join("neuroverse-nav.log")
    } else {
        PathBuf::from("neuroverse-nav.log")
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
/// Returns `~/.config/neuroverse-nav/config.toml` on Unix, the platform
/// equivalent elsewhere, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("neuroverse-nav").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `NEUROVERSE_NAV_CONFIG` environment variable
/// 3. Default path `~/.config/neuroverse-nav/config.toml`
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

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        navbar_height: config.navbar_height.unwrap_or(defaults.navbar_height),
        settle: config.settle.unwrap_or(defaults.settle),
        settle_delay_ms: config.settle_delay_ms.unwrap_or(defaults.settle_delay_ms),
        scroll_step_px: config.scroll_step_px.unwrap_or(defaults.scroll_step_px),
        px_per_row: config.px_per_row.unwrap_or(defaults.px_per_row),
        scroll_to_top_ms: config.scroll_to_top_ms.unwrap_or(defaults.scroll_to_top_ms),
        start_route: config.start_route.unwrap_or(defaults.start_route),
        embedded: config.embedded.unwrap_or(defaults.embedded),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `NEUROVERSE_NAV_ROUTE`: Override the start route
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(route) = std::env::var(ROUTE_ENV) {
        config.start_route = route;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    route_override: Option<String>,
    embedded_override: Option<bool>,
    settle_override: Option<SettleMode>,
) -> ResolvedConfig {
    if let Some(route) = route_override {
        config.start_route = route;
    }

    if let Some(embedded) = embedded_override {
        config.embedded = embedded;
    }

    if let Some(settle) = settle_override {
        config.settle = settle;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
