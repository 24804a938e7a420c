use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Default settings in the `[ava]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvaConfig {
    /// Backend endpoint URL the chat client posts to.
    pub endpoint: Option<String>,
}

/// Settings in the `[server]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port for `ava serve`.
    pub port: Option<u16>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/ava/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Client defaults.
    #[serde(default)]
    pub ava: AvaConfig,
    /// Server defaults.
    #[serde(default)]
    pub server: ServerConfig,
}

impl ConfigFile {
    /// Resolves the endpoint: CLI flag > config file > built-in default.
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.ava.endpoint.clone())
            .unwrap_or_else(|| super::DEFAULT_ENDPOINT.to_string())
    }

    /// Resolves the server port: CLI flag > config file > built-in default.
    pub fn resolve_port(&self, flag: Option<u16>) -> u16 {
        flag.or(self.server.port).unwrap_or(super::DEFAULT_PORT)
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/ava/config.toml`
    /// or `~/.config/ava/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    /// Creates a config manager backed by an explicit path (used in tests).
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
