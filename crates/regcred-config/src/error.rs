//! Error types for regcred-config

use std::path::PathBuf;

/// Result type for regcred-config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating or reading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration file exists at the resolved location
    #[error("Config file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed document; `path` is `None` for in-memory documents
    #[error("Failed to parse config{}: {message}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// The base64 `auth` field of an entry could not be decoded
    #[error("Invalid auth field: {message}")]
    InvalidAuth { message: String },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means "there is no configuration" rather than
    /// "the configuration is broken".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
