//! Error types for credential resolution

use regcred_config::ConfigError;
use regcred_helper::HelperError;

/// Errors that can occur while resolving credentials
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration exists but could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The selected helper failed
    #[error(transparent)]
    Helper(#[from] HelperError),
}

impl Error {
    /// Whether a helper reported that it has nothing stored for the host
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Helper(e) if e.is_not_found())
    }
}

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, Error>;
