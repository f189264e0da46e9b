//! Configuration management for bracket fetching.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/bracket/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Challonge API credentials
    pub challonge: ChallongeConfig,
    /// HTTP transport settings
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `BRACKET_CHALLONGE_USERNAME`: Challonge account name
    /// - `BRACKET_CHALLONGE_API_KEY`: Challonge API key
    /// - `BRACKET_HTTP_TIMEOUT_SECS`: Request timeout in seconds
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(username) = lookup("BRACKET_CHALLONGE_USERNAME") {
            tracing::debug!("Override challonge.username from env");
            self.challonge.username = Some(username);
        }

        if let Some(api_key) = lookup("BRACKET_CHALLONGE_API_KEY") {
            tracing::debug!("Override challonge.api_key from env");
            self.challonge.api_key = Some(api_key);
        }

        if let Some(val) = lookup("BRACKET_HTTP_TIMEOUT_SECS") {
            let secs = val.parse().map_err(|_| ConfigError::InvalidValue {
                field: "http.timeout_secs".to_string(),
                reason: format!("expected whole seconds, got '{val}'"),
            })?;
            self.http.timeout_secs = secs;
            tracing::debug!("Override http.timeout_secs from env: {}", secs);
        }

        Ok(())
    }

    /// Save configuration to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/bracket/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "bracket", "bracket").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Challonge API credentials.
///
/// Challonge requires HTTP basic auth with the account name and API key.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallongeConfig {
    /// Account name
    pub username: Option<String>,
    /// API key from the Challonge developer settings
    pub api_key: Option<String>,
}

impl ChallongeConfig {
    /// Whether both halves of the credential pair are present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.api_key.is_some()
    }
}

impl fmt::Debug for ChallongeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChallongeConfig")
            .field("username", &self.username)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// HTTP transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("bracket/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
