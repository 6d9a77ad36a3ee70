//! regcred CLI
//!
//! Resolves container registry credentials the same way registry clients
//! do and prints them as a credential helper would.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Commands::Get {
            host,
            config,
            normalize,
        } => {
            let creds = commands::run_get(&host, config.as_deref(), normalize)?;
            println!("{}", serde_json::to_string(&creds)?);
        }
        Commands::Helper { name, host } => {
            let creds = commands::run_helper(&name, &host)?;
            println!("{}", serde_json::to_string(&creds)?);
        }
        Commands::DefaultHelper => {
            if let Some(helper) = commands::default_helper() {
                println!("{}", helper);
            }
        }
    }

    Ok(())
}
