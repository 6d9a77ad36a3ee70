//! Credential helper invocation for container registries
//!
//! Credential helpers are external programs named `docker-credential-<name>`
//! that answer `get` requests: the registry host is written to their stdin
//! and they print `{"Username": .., "Secret": ..}` on stdout.
//!
//! This crate provides:
//!
//! - Platform default helper selection ([`default_helper`])
//! - The subprocess protocol and failure classification ([`protocol`])
//! - [`HelperInvoker`], which ties both together over a [`HelperRuntime`]
//!
//! Helpers are optional: a missing helper program yields empty
//! [`Credentials`] rather than an error.

pub mod error;
pub mod invoker;
pub mod platform;
pub mod protocol;
pub mod runtime;
pub mod types;

pub use error::{HelperError, Result};
pub use invoker::{HelperInvoker, get_credentials_from_helper};
pub use platform::{Platform, default_helper};
pub use protocol::{classify_failure, helper_program};
pub use runtime::{CommandOutput, HelperRuntime, SystemRuntime};
pub use types::Credentials;
