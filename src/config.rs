//! Configuration management for the service.
//!
//! Every setting has a compiled-in default, so the service runs without any
//! configuration file. An optional TOML file in the platform config directory
//! (or passed with `--config`) overrides individual fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, DEFAULT_WORKERS};

/// Network and runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Number of runtime worker threads
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Prebuilt frontend bundle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Directory holding the static frontend build (e.g. "frontend/out")
    pub static_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Service configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeywordMatrix/config.toml`
/// - macOS: `~/Library/Application Support/KeywordMatrix/config.toml`
/// - Windows: `%APPDATA%\KeywordMatrix\config.toml`
///
/// # Validation
///
/// - `host` must be non-empty and form a valid socket address with `port`
/// - `port` must be non-zero
/// - `workers` must be at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Network and runtime settings
    pub server: ServerConfig,
    /// Frontend bundle settings
    pub frontend: FrontendConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("KeywordMatrix");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist (or no config directory can be determined),
    /// returns the default configuration.
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::new()),
        }
    }

    /// Loads and validates configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            anyhow::bail!("Server host cannot be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be non-zero");
        }

        if self.server.workers == 0 {
            anyhow::bail!("Server workers must be at least 1");
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Socket address built from `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .context(format!(
                "Invalid listen address {}:{}",
                self.server.host, self.server.port
            ))
    }

    /// Returns the static frontend directory if it exists on disk.
    pub fn static_root(&self) -> Option<PathBuf> {
        self.frontend
            .static_dir
            .is_dir()
            .then(|| self.frontend.static_dir.clone())
    }
}
