//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for locator settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Application configuration.
///
/// Contains all user-configurable settings organized into sections.
/// Serialized to/from TOML format for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Caching and lookup behavior
    #[serde(default)]
    pub locator: LocatorOptions,
    /// Console logging
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Steam install overrides
    #[serde(default)]
    pub steam: SteamConfig,
}

/// How aggressively a [`Locator`](crate::Locator) reuses earlier results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemoryMode {
    /// Resolve everything once and reuse it for the locator's lifetime
    #[default]
    Full,
    /// Remember the install path and library folders, re-index games on every query
    Partial,
    /// Remember nothing; every query starts from the registry
    None,
}

/// Options controlling a [`Locator`](crate::Locator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorOptions {
    /// Caching policy (default: Full)
    #[serde(default)]
    pub memory: MemoryMode,
    /// Return empty values instead of "not found" errors (default: false)
    #[serde(default)]
    pub suppress_errors: bool,
    /// Build a catalog of installed games for lookups (default: true)
    #[serde(default = "default_true")]
    pub index_library: bool,
}

/// Console verbosity, ordered from silent to chatty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    None,
    Critical,
    Error,
    Warning,
    Information,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    ///
    /// `tracing` has no level above error, so Critical and Error share one.
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::None => "off",
            Self::Critical | Self::Error => "error",
            Self::Warning => "warn",
            Self::Information => "info",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Console log level (default: none)
    #[serde(default)]
    pub level: LogLevel,
}

/// Steam location overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SteamConfig {
    /// Use this directory as the Steam install instead of asking the resolver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            memory: MemoryMode::default(),
            suppress_errors: false,
            index_library: default_true(),
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Steamfinder\config`
/// On macOS: `~/Library/Application Support/io.steamfinder.Steamfinder`
/// On Linux: `~/.config/steamfinder`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.steamfinder", "", "Steamfinder")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from disk.
///
/// Reads `config.toml` from the platform's configuration directory.
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    config_dir().map(|dir| load_from(&dir)).unwrap_or_default()
}

/// Loads `config.toml` from `dir`, falling back to defaults.
pub fn load_from(dir: &Path) -> Config {
    std::fs::read_to_string(dir.join(CONFIG_FILE))
        .ok()
        .and_then(|content| parse(&content))
        .unwrap_or_default()
}

/// Parses configuration text, logging and discarding invalid files.
pub fn parse(content: &str) -> Option<Config> {
    match toml::from_str(content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring invalid config.toml: {}", e);
            None
        }
    }
}

/// Saves the configuration to disk.
///
/// Writes `config.toml` to the platform's configuration directory and
/// returns the file written, or `None` when there is no home directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save(config: &Config) -> std::io::Result<Option<PathBuf>> {
    config_dir().map(|dir| save_to(&dir, config)).transpose()
}

/// Writes `config.toml` into `dir`, creating the directory if needed.
pub fn save_to(dir: &Path, config: &Config) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let content = toml::to_string_pretty(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let path = dir.join(CONFIG_FILE);
    std::fs::write(&path, content)?;
    Ok(path)
}
