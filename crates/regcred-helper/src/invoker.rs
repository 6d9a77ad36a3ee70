//! Credential lookup through an external helper program

use tracing::debug;

use crate::error::{HelperError, Result};
use crate::platform::{PASS_PROGRAM, Platform, default_helper};
use crate::protocol::{GET_ARG, classify_failure, helper_program};
use crate::runtime::{HelperRuntime, SystemRuntime};
use crate::types::Credentials;

/// Looks up registry credentials by running credential helpers
///
/// Each call is a single, independent subprocess run. Nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct HelperInvoker<R = SystemRuntime> {
    runtime: R,
}

impl HelperInvoker<SystemRuntime> {
    /// Invoker using the real process environment
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: HelperRuntime> HelperInvoker<R> {
    pub fn with_runtime(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Default helper name for the runtime's platform, if it has one
    pub fn default_helper(&self) -> Option<&'static str> {
        let platform = self.runtime.platform();
        let pass_available =
            platform == Platform::Linux && self.runtime.look_path(PASS_PROGRAM).is_some();
        let helper = default_helper(platform, pass_available);
        tracing::trace!(?platform, pass_available, ?helper, "Selected default helper");
        helper
    }

    /// Get credentials for `hostname` from the helper named `helper`.
    ///
    /// An empty `helper` selects the platform default. When there is no
    /// default, or the helper program is not on the search path, empty
    /// credentials are returned without error.
    pub fn get_credentials(&self, helper: &str, hostname: &str) -> Result<Credentials> {
        let helper = if helper.is_empty() {
            match self.default_helper() {
                Some(default) => default,
                None => {
                    debug!("No default credential helper for this platform");
                    return Ok(Credentials::empty());
                }
            }
        } else {
            helper
        };

        let program = helper_program(helper);
        let Some(path) = self.runtime.look_path(&program) else {
            debug!(%program, "Credential helper not found on search path");
            return Ok(Credentials::empty());
        };

        debug!(?path, hostname, "Invoking credential helper");
        let output = self
            .runtime
            .run(&path, &[GET_ARG], hostname.as_bytes())
            .map_err(|source| HelperError::Io {
                program: program.clone(),
                source,
            })?;

        if !output.success {
            if let Some(err) = classify_failure(&String::from_utf8_lossy(&output.stdout)) {
                return Err(err);
            }
            return Err(HelperError::CommandFailed {
                program,
                code: output.code.unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // A `null` document carries no credentials.
        let creds: Option<Credentials> = serde_json::from_slice(&output.stdout)?;
        Ok(creds.unwrap_or_default())
    }
}

/// Get credentials for `hostname` from `helper` using the process environment
///
/// Shorthand for [`HelperInvoker::new`] followed by
/// [`HelperInvoker::get_credentials`].
pub fn get_credentials_from_helper(helper: &str, hostname: &str) -> Result<Credentials> {
    HelperInvoker::new().get_credentials(helper, hostname)
}
