//! AGP Conventions CLI entry point
//!
//! Handles command-line argument parsing, logging setup, error display, and
//! command execution. The commands themselves live in [`agp_conventions::cli`]:
//! - `check` - evaluate configuration conventions
//! - `finalize` - run the full finalization pipeline
//! - `resolve` - evaluate an agp: custom variable

use agp_conventions::cli;
use agp_conventions::core::user_friendly_error;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // An explicit RUST_LOG wins over the --verbose/--quiet flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    // Logs go to stderr so `finalize` can stream the template on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
