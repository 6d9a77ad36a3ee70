//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// regcred - resolve container registry credentials
#[derive(Parser, Debug)]
#[command(name = "regcred")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve credentials for a registry host
    ///
    /// Prints {"Username": .., "Secret": ..} on stdout.
    ///
    /// Examples:
    ///   regcred get ghcr.io
    ///   regcred get docker.io --normalize
    ///   regcred get quay.io --config ./config.json
    Get {
        /// Registry host
        host: String,

        /// Config file to use instead of the default location
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Map Docker Hub aliases to the key its credentials are stored under
        #[arg(short, long)]
        normalize: bool,
    },

    /// Ask a credential helper directly
    ///
    /// An empty NAME ("") uses the platform default helper.
    Helper {
        /// Helper name without the docker-credential- prefix
        name: String,

        /// Registry host
        host: String,
    },

    /// Print the platform default helper name
    DefaultHelper,
}
