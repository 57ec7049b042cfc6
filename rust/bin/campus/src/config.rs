//! Client configuration.
//!
//! Reads/writes `~/.campus/config.toml`.

use std::path::{Path, PathBuf};

use campus_flux::StalePolicy;
use serde::{Deserialize, Serialize};

/// Client configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server URL (e.g. "http://localhost:8080").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Bearer token sent with every request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Message locale ("fr" or "en").
    pub locale: String,

    /// What to do with responses that arrive after a newer request.
    #[serde(rename = "stale-policy")]
    pub stale_policy: StalePolicy,

    /// Preferences database (default: ~/.campus/prefs.redb).
    #[serde(rename = "prefs-path", skip_serializing_if = "String::is_empty")]
    pub prefs_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            token: String::new(),
            locale: "fr".to_string(),
            stale_policy: StalePolicy::default(),
            prefs_path: String::new(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub token: Option<String>,
    pub locale: Option<String>,
    pub stale_policy: Option<StalePolicy>,
}

impl ClientConfig {
    /// Default config file path: ~/.campus/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(server) = overrides.server {
            self.server = server;
        }
        if let Some(token) = overrides.token {
            self.token = token;
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(policy) = overrides.stale_policy {
            self.stale_policy = policy;
        }
    }

    pub fn prefs_db_path(&self) -> PathBuf {
        if self.prefs_path.is_empty() {
            dirs_path().join("prefs.redb")
        } else {
            PathBuf::from(&self.prefs_path)
        }
    }
}

/// Return the campus config directory (~/.campus).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".campus")
}
