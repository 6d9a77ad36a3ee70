//! Registry credential resolution
//!
//! Given a registry host, decides which credential source applies and
//! returns a username/secret pair. Sources are consulted in a fixed order:
//!
//! 1. A per-registry helper from `credHelpers`
//! 2. The global `credsStore` helper
//! 3. An inline entry from `auths`
//! 4. The platform default helper
//!
//! Exactly one source is used per lookup. A missing configuration file goes
//! straight to the platform default helper.

pub mod error;
pub mod resolver;

pub use error::{Error, Result};
pub use resolver::{ConfigCredentials, CredentialSource, Resolver, get_registry_credentials};

pub use regcred_config::{ConfigError, DockerConfig};
pub use regcred_helper::{Credentials, HelperError};
