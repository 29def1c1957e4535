//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::PluginConfig;
use crate::context::ServiceContext;
use crate::descriptor::ServiceDescriptor;
use crate::template::Template;

/// Everything a command needs from a deployment document on disk.
pub struct LoadedDocument {
    /// The full document tree.
    pub template: Template,
    /// Typed descriptor view of the same document.
    pub descriptor: ServiceDescriptor,
    /// Configuration resolved from the custom section.
    pub config: PluginConfig,
    /// Context snapshot for the stage functions.
    pub context: ServiceContext,
}

/// Read and parse a deployment document, then resolve its configuration
/// and context.
pub async fn load_document(path: &Path) -> Result<LoadedDocument> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read deployment document {}", path.display()))?;
    let template = Template::parse_str(&contents, &path.display().to_string())?;
    let descriptor = template.descriptor()?;
    let config = PluginConfig::from_descriptor(&descriptor)?;
    let context = ServiceContext::from_descriptor(&descriptor);
    Ok(LoadedDocument {
        template,
        descriptor,
        config,
        context,
    })
}
