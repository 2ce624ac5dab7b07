//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\music-finder\config.toml
//! - macOS: ~/Library/Application Support/music-finder/config.toml
//! - Linux: ~/.config/music-finder/config.toml
//!
//! Every key is optional; missing keys take the built-in defaults. The
//! loaded value is immutable once handed to the client.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// MusicBrainz rate limit floor; `pacing_ms` below this is raised to it
pub const MIN_PACING_MS: u64 = 1100;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MusicBrainz web service settings
    pub musicbrainz: MusicBrainzConfig,
}

/// MusicBrainz web service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicBrainzConfig {
    /// API root including the version prefix
    pub base_url: String,

    /// Application name sent in the User-Agent
    pub app_name: String,

    /// Application version sent in the User-Agent
    pub app_version: String,

    /// Contact (email or URL) sent in the User-Agent
    pub contact: String,

    /// Response format (`fmt` parameter)
    pub format: String,

    /// Minimum spacing between requests, in milliseconds (never below 1100)
    pub pacing_ms: u64,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            app_name: "MusicFinder".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contact: "https://github.com/music-finder/music-finder".to_string(),
            format: "json".to_string(),
            pacing_ms: MIN_PACING_MS,
        }
    }
}

impl MusicBrainzConfig {
    /// `<app>/<version> ( <contact> )`, the format MusicBrainz asks for
    pub fn user_agent(&self) -> String {
        format!("{}/{} ( {} )", self.app_name, self.app_version, self.contact)
    }

    /// Spacing between requests, clamped to [`MIN_PACING_MS`]
    pub fn pacing_interval(&self) -> Duration {
        if self.pacing_ms < MIN_PACING_MS {
            tracing::warn!(
                "pacing_ms = {} is below the MusicBrainz limit, using {}",
                self.pacing_ms,
                MIN_PACING_MS
            );
        }
        Duration::from_millis(self.pacing_ms.max(MIN_PACING_MS))
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("music-finder"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file
///
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = to_toml(config)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

/// Serialize to pretty TOML
pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(ConfigError::Serialize)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
