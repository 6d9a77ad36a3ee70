//! The `docker-credential-*` subprocess protocol
//!
//! A helper is run as `docker-credential-<name> get` with the registry host
//! as its entire stdin. On success stdout holds a JSON credentials object.
//! On failure stdout may hold one of two well-known messages, which are
//! mapped to dedicated error variants.

use crate::error::HelperError;

/// Prefix shared by all credential helper programs
pub const HELPER_PREFIX: &str = "docker-credential-";

/// The single argument requesting credential retrieval
pub const GET_ARG: &str = "get";

/// Helper message for a host with no stored credentials
pub const ERR_CREDENTIALS_NOT_FOUND: &str = "credentials not found in native keychain";

/// Helper message for a request without a server URL
pub const ERR_MISSING_SERVER_URL: &str = "no credentials server URL";

/// Program name for a helper identifier
pub fn helper_program(helper: &str) -> String {
    format!("{HELPER_PREFIX}{helper}")
}

/// Map the stdout of a failed helper run to a well-known error.
///
/// Returns `None` when the output is not one of the recognized messages;
/// the caller then reports the raw execution failure.
pub fn classify_failure(stdout: &str) -> Option<HelperError> {
    match stdout.trim() {
        ERR_CREDENTIALS_NOT_FOUND => Some(HelperError::CredentialsNotFound),
        ERR_MISSING_SERVER_URL => Some(HelperError::MissingServerUrl),
        _ => None,
    }
}
