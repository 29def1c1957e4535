//! The `finalize` command: run the full finalization pipeline.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::load_document;
use crate::bucket::evaluate_deployment_bucket;
use crate::pipeline::run_finalize_stages;

/// Run the full finalization pipeline over a deployment document.
///
/// Checks the deployment-bucket convention, injects the standard environment
/// variables, attaches the standard resource tags, and resolves account-id
/// placeholders, then emits the finalized template as JSON.
#[derive(Args)]
pub struct FinalizeCommand {
    /// Path to the deployment document (YAML or JSON).
    document: PathBuf,

    /// Write the finalized template here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl FinalizeCommand {
    /// Execute the pipeline.
    pub async fn execute(self) -> Result<()> {
        let loaded = load_document(&self.document).await?;

        evaluate_deployment_bucket(&loaded.descriptor, &loaded.config)?;

        let finalized = run_finalize_stages(loaded.template, &loaded.config, &loaded.context)?;
        let rendered = finalized.to_json_pretty()?;

        match self.output {
            Some(path) => {
                tokio::fs::write(&path, rendered.as_bytes())
                    .await
                    .with_context(|| {
                        format!("Failed to write finalized template {}", path.display())
                    })?;
                eprintln!(
                    "{} Finalized template written to {}",
                    "✓".green(),
                    path.display()
                );
            }
            None => println!("{rendered}"),
        }
        Ok(())
    }
}
