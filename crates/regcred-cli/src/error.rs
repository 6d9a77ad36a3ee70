//! Error types for regcred-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from regcred-core
    #[error(transparent)]
    Core(#[from] regcred_core::Error),

    /// Error from regcred-helper
    #[error(transparent)]
    Helper(#[from] regcred_helper::HelperError),

    /// Failed to encode output
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Logger setup failed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
