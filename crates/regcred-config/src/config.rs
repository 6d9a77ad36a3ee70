//! Loading the Docker-style `config.json`

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::auth::AuthEntry;
use crate::constants::{CONFIG_DIR_ENV, CONFIG_FILE_NAME, CONFIG_HOME_DIR};
use crate::error::{ConfigError, Result};

/// The parts of `config.json` relevant to credential resolution
///
/// Keys this crate does not know about (`HttpHeaders`, `psFormat`, ...) are
/// ignored when parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerConfig {
    /// Inline credentials keyed by registry host
    #[serde(rename = "auths", skip_serializing_if = "HashMap::is_empty")]
    pub auth_configs: HashMap<String, AuthEntry>,

    /// Helper used for every registry without a per-registry helper
    #[serde(rename = "credsStore", skip_serializing_if = "String::is_empty")]
    pub credentials_store: String,

    /// Per-registry helper names, without the `docker-credential-` prefix
    #[serde(rename = "credHelpers", skip_serializing_if = "HashMap::is_empty")]
    pub credential_helpers: HashMap<String, String>,
}

impl DockerConfig {
    /// Parse a configuration document held in memory
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Load the configuration from a specific file.
    ///
    /// A missing file is reported as [`ConfigError::NotFound`] so callers can
    /// tell "no configuration" apart from "broken configuration".
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        tracing::debug!(?path, "Loaded registry config");

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Helper configured for exactly this host, if any
    pub fn credential_helper(&self, hostname: &str) -> Option<&str> {
        self.credential_helpers.get(hostname).map(String::as_str)
    }

    /// The global credential store, if one is set
    pub fn credentials_store(&self) -> Option<&str> {
        if self.credentials_store.is_empty() {
            None
        } else {
            Some(&self.credentials_store)
        }
    }

    /// Inline `auths` entry for exactly this host, if any
    pub fn auth_entry(&self, hostname: &str) -> Option<&AuthEntry> {
        self.auth_configs.get(hostname)
    }
}

/// Path of the configuration file for the current environment.
///
/// `$DOCKER_CONFIG/config.json` when `DOCKER_CONFIG` is set and non-empty,
/// otherwise `~/.docker/config.json`.
pub fn config_path() -> Result<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_DIR_ENV), dirs::home_dir())
}

fn resolve_config_path(config_dir: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = config_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME));
    }

    let home = home.ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_HOME_DIR).join(CONFIG_FILE_NAME))
}

/// Load the configuration from its default location
pub fn load_default_config() -> Result<DockerConfig> {
    let path = config_path()?;
    DockerConfig::load_from_path(&path)
}
