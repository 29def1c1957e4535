//! Finalization pipeline
//!
//! The template transformations run as a typed list of named stages in a
//! fixed declared order: environment variables, then tags, then placeholder
//! resolution. Placeholders resolve last so sentinels introduced by earlier
//! stages are caught in the same pass. Each stage takes the template by
//! value and returns it; a stage error aborts the remaining stages.
//!
//! The crate exposes the stage functions and the declared order; the
//! orchestrator (the CLI, or a host integration) drives execution.

use anyhow::Result;
use tracing::debug;

use crate::config::PluginConfig;
use crate::context::ServiceContext;
use crate::env_vars::inject_env_vars;
use crate::placeholder::resolve_account_id_placeholders;
use crate::tags::apply_standard_tags;
use crate::template::Template;

/// A template transformation: ownership in, ownership out.
pub type StageFn = fn(Template, &PluginConfig, &ServiceContext) -> Result<Template>;

/// One named finalization stage.
#[derive(Clone, Copy)]
pub struct Stage {
    /// Stage name, used in logs and error context.
    pub name: &'static str,
    /// The transformation itself.
    pub run: StageFn,
}

/// The finalization stages in their declared order.
#[must_use]
pub const fn finalize_stages() -> [Stage; 3] {
    [
        Stage {
            name: "standard-env-vars",
            run: inject_env_vars,
        },
        Stage {
            name: "standard-tags",
            run: apply_standard_tags,
        },
        Stage {
            name: "account-id-placeholders",
            run: resolve_account_id_placeholders,
        },
    ]
}

/// Run every finalization stage in order.
///
/// Convenience orchestrator used by the CLI and tests; the first failing
/// stage aborts the rest.
pub fn run_finalize_stages(
    mut template: Template,
    config: &PluginConfig,
    context: &ServiceContext,
) -> Result<Template> {
    for stage in finalize_stages() {
        debug!("Running finalization stage \"{}\"", stage.name);
        template = (stage.run)(template, config, context)?;
    }
    Ok(template)
}
