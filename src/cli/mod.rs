//! Command-line interface for AGP Conventions.
//!
//! The CLI is the orchestrator around the library's stage functions. Each
//! command is implemented in its own module with its own argument structure
//! and execution logic:
//!
//! - `check` - evaluate configuration conventions (deployment bucket) only
//! - `finalize` - run the full finalization pipeline and emit the template
//! - `resolve` - evaluate one `agp:` custom variable against a descriptor
//!
//! # Usage
//!
//! ```bash
//! # Fail the build when the deployment bucket deviates from the convention
//! agp check serverless.yml
//!
//! # Inject env vars and tags, resolve placeholders, write the result
//! agp finalize compiled-template.json -o finalized.json
//!
//! # What would ${agp:sls-regional-name} resolve to?
//! agp resolve sls-regional-name serverless.yml
//! ```
//!
//! All commands support the global `--verbose` and `--quiet` flags, which
//! map onto the tracing filter the same way `RUST_LOG` does.

mod check;
pub mod common;
mod finalize;
mod resolve;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Top-level CLI structure.
///
/// Handles the global flags and delegates to subcommands.
#[derive(Parser)]
#[command(
    name = "agp",
    about = "AGP Conventions - inject organization-wide AWS deployment conventions",
    version,
    long_about = "Injects standard resource tags and environment variables into compiled \
deployment templates, checks deployment-bucket conventions, and resolves agp: custom variables."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors, for automation.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Evaluate configuration conventions against a deployment document.
    Check(check::CheckCommand),

    /// Run the full finalization pipeline over a deployment document.
    Finalize(finalize::FinalizeCommand),

    /// Resolve an agp: custom variable against a deployment document.
    Resolve(resolve::ResolveCommand),
}

impl Cli {
    /// The tracing filter directive implied by the global flags.
    ///
    /// An explicit `RUST_LOG` in the environment still wins; this is only
    /// the fallback the binary installs.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Execute the selected command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check(cmd) => cmd.execute().await,
            Commands::Finalize(cmd) => cmd.execute().await,
            Commands::Resolve(cmd) => cmd.execute().await,
        }
    }
}
