//! The `resolve` command: evaluate one `agp:` custom variable.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::load_document;
use crate::vars::{DescriptorResolver, resolve_custom_variable};

/// Resolve an `agp:` custom variable against a deployment document.
///
/// The document supplies the upstream values (service name, stage, region);
/// the command prints the derived name. Exits non-zero for an unsupported
/// address, listing the two supported ones.
#[derive(Args)]
pub struct ResolveCommand {
    /// The address to resolve (e.g. "sls-default-name"), without the
    /// "agp:" prefix.
    address: String,

    /// Path to the deployment document (YAML or JSON).
    document: PathBuf,
}

impl ResolveCommand {
    /// Execute the resolution.
    pub async fn execute(self) -> Result<()> {
        let loaded = load_document(&self.document).await?;
        let resolver = DescriptorResolver::new(&loaded.descriptor);
        let value = resolve_custom_variable(&self.address, &resolver).await?;
        println!("{value}");
        Ok(())
    }
}
