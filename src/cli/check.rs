//! The `check` command: evaluate configuration conventions.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::load_document;
use crate::bucket::evaluate_deployment_bucket;

/// Evaluate configuration conventions against a deployment document.
///
/// Parses the document, resolves the plugin configuration, and runs the
/// deployment-bucket convention check. Exits non-zero when the bucket
/// configuration deviates and `checkDeploymentBucketConfig` is enabled.
#[derive(Args)]
pub struct CheckCommand {
    /// Path to the deployment document (YAML or JSON).
    document: PathBuf,
}

impl CheckCommand {
    /// Execute the check.
    pub async fn execute(self) -> Result<()> {
        let loaded = load_document(&self.document).await?;

        println!(
            "Checking conventions for service {} (stage {}, region {})",
            loaded.context.service_name.bold(),
            loaded.context.app_stage,
            loaded.context.region
        );

        evaluate_deployment_bucket(&loaded.descriptor, &loaded.config)?;

        println!("{} Conventions check passed", "✓".green());
        Ok(())
    }
}
