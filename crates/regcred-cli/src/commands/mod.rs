//! Command implementations

use std::path::Path;

use regcred_config::resolve_registry_host;
use regcred_core::{Credentials, Resolver};
use regcred_helper::HelperInvoker;

use crate::error::Result;

/// Resolve credentials for `host`, optionally from an explicit config file
pub fn run_get(host: &str, config: Option<&Path>, normalize: bool) -> Result<Credentials> {
    let host = if normalize {
        resolve_registry_host(host)
    } else {
        host
    };

    let resolver = match config {
        Some(path) => Resolver::new().with_config_path(path),
        None => Resolver::new(),
    };

    tracing::debug!(host, config = ?resolver.config_path(), "Resolving credentials");
    Ok(resolver.resolve(host)?)
}

/// Ask the helper `name` for credentials for `host`
pub fn run_helper(name: &str, host: &str) -> Result<Credentials> {
    Ok(HelperInvoker::new().get_credentials(name, host)?)
}

/// The platform default helper name, if any
pub fn default_helper() -> Option<&'static str> {
    HelperInvoker::new().default_helper()
}
