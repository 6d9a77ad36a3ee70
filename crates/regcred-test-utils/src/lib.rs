//! Shared test utilities for the regcred workspace.
//!
//! This crate provides fixtures for credential resolution tests. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`config`] — writing `config.json` files into temporary directories
//! - [`helpers`] — [`FakeHelperDir`] with scripted `docker-credential-*` programs

pub mod config;
pub mod helpers;

pub use config::write_config;
pub use helpers::FakeHelperDir;
