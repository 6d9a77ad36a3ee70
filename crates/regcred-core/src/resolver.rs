//! Credential source precedence and the top-level lookup

use std::path::{Path, PathBuf};

use regcred_config::{AuthEntry, DockerConfig, load_default_config};
use regcred_helper::{Credentials, HelperInvoker, HelperRuntime, SystemRuntime};
use tracing::debug;

use crate::error::Result;

/// The credential source chosen for a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource<'a> {
    /// Helper configured for this host in `credHelpers`
    Helper(&'a str),
    /// Global helper from `credsStore`
    Store(&'a str),
    /// Inline entry from `auths`
    Inline(&'a AuthEntry),
    /// Platform default helper
    PlatformDefault,
}

impl<'a> CredentialSource<'a> {
    /// Pick the single source to consult for `hostname`.
    ///
    /// Order: per-host helper, global store, inline entry, platform default.
    pub fn select(config: &'a DockerConfig, hostname: &str) -> Self {
        if let Some(helper) = config.credential_helper(hostname) {
            return Self::Helper(helper);
        }
        if let Some(store) = config.credentials_store() {
            return Self::Store(store);
        }
        match config.auth_entry(hostname) {
            Some(entry) => Self::Inline(entry),
            None => Self::PlatformDefault,
        }
    }

    /// Helper name this source runs; empty for the platform default,
    /// `None` for inline entries.
    pub fn helper(&self) -> Option<&'a str> {
        match *self {
            Self::Helper(helper) | Self::Store(helper) => Some(helper),
            Self::PlatformDefault => Some(""),
            Self::Inline(_) => None,
        }
    }

    /// Short name of the source kind, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Helper(_) => "credential-helper",
            Self::Store(_) => "credentials-store",
            Self::Inline(_) => "inline",
            Self::PlatformDefault => "platform-default",
        }
    }
}

/// Resolves registry credentials from configuration and helpers
#[derive(Debug, Clone, Default)]
pub struct Resolver<R = SystemRuntime> {
    invoker: HelperInvoker<R>,
    /// Explicit config file; the default location is used when `None`
    config_path: Option<PathBuf>,
}

impl Resolver<SystemRuntime> {
    /// Resolver using the process environment and the default config file
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: HelperRuntime> Resolver<R> {
    pub fn with_runtime(runtime: R) -> Self {
        Self {
            invoker: HelperInvoker::with_runtime(runtime),
            config_path: None,
        }
    }

    /// Load configuration from `path` instead of the default location
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn invoker(&self) -> &HelperInvoker<R> {
        &self.invoker
    }

    fn load_config(&self) -> regcred_config::Result<DockerConfig> {
        match &self.config_path {
            Some(path) => DockerConfig::load_from_path(path),
            None => load_default_config(),
        }
    }

    /// Resolve credentials for `hostname`, loading the configuration first.
    ///
    /// Without a configuration file the platform default helper is asked.
    /// Any other configuration failure is returned unchanged.
    pub fn resolve(&self, hostname: &str) -> Result<Credentials> {
        match self.load_config() {
            Ok(config) => self.resolve_with_config(&config, hostname),
            Err(e) if e.is_not_found() => {
                debug!(error = %e, "No registry config, using platform default helper");
                Ok(self.invoker.get_credentials("", hostname)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve credentials for `hostname` against an already loaded
    /// configuration.
    pub fn resolve_with_config(&self, config: &DockerConfig, hostname: &str) -> Result<Credentials> {
        let source = CredentialSource::select(config, hostname);
        debug!(
            hostname,
            source = source.kind(),
            helper = source.helper().unwrap_or_default(),
            "Selected credential source"
        );

        match source {
            CredentialSource::Inline(entry) => Ok(entry.credentials().into()),
            CredentialSource::Helper(helper) | CredentialSource::Store(helper) => {
                Ok(self.invoker.get_credentials(helper, hostname)?)
            }
            CredentialSource::PlatformDefault => Ok(self.invoker.get_credentials("", hostname)?),
        }
    }
}

/// Resolution directly on a loaded configuration
pub trait ConfigCredentials {
    /// Credentials for `hostname`, using the process environment for helpers
    fn registry_credentials(&self, hostname: &str) -> Result<Credentials>;
}

impl ConfigCredentials for DockerConfig {
    fn registry_credentials(&self, hostname: &str) -> Result<Credentials> {
        Resolver::new().resolve_with_config(self, hostname)
    }
}

/// Credentials for `hostname` from the default configuration and helpers
pub fn get_registry_credentials(hostname: &str) -> Result<Credentials> {
    Resolver::new().resolve(hostname)
}
