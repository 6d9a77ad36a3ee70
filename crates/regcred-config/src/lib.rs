//! Docker-style configuration access for registry credential resolution
//!
//! Loads `config.json` from the well-known location and exposes the three
//! pieces the credential resolver consults: per-registry credential helpers,
//! the global credential store and inline `auths` entries.

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;

pub use auth::AuthEntry;
pub use config::{DockerConfig, config_path, load_default_config};
pub use constants::{CONFIG_DIR_ENV, CONFIG_FILE_NAME, CONFIG_HOME_DIR};
pub use error::{ConfigError, Result};
pub use host::resolve_registry_host;
