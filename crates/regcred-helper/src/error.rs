//! Error types for helper invocation

/// Errors that can occur while invoking a credential helper
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    /// The helper has no credentials for the requested host
    #[error("credentials not found in native keychain")]
    CredentialsNotFound,

    /// The helper was asked for credentials without a server URL
    #[error("no credentials server URL")]
    MissingServerUrl,

    /// The helper exited with a failure status and no recognized message
    #[error("Helper {program} failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Helper program that was run
        program: String,
        /// Exit code, or -1 when terminated by a signal
        code: i32,
        /// Captured stderr output
        stderr: String,
    },

    /// The helper could not be spawned or talked to
    #[error("Failed to run helper {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The helper succeeded but its output was not a credentials object
    #[error("Failed to decode helper output: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HelperError {
    /// Whether the helper reported one of its well-known "nothing stored"
    /// conditions.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CredentialsNotFound | Self::MissingServerUrl)
    }
}

/// Result type alias for helper operations
pub type Result<T> = std::result::Result<T, HelperError>;
