//! Standard environment variables
//!
//! Computes the fixed map of baseline environment variables and merges it
//! into the template's `provider.environment` block. Standard variables
//! overwrite anything pre-declared under the same name; that is deliberate
//! convention enforcement, preserved as documented behavior.
//!
//! `AGP_APP_ACCOUNT_ID` is written as the account-id placeholder sentinel;
//! the placeholder stage resolves it once the template is fully compiled.

use anyhow::Result;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::config::PluginConfig;
use crate::constants::{ACCOUNT_ID_PLACEHOLDER, NODE_OPTIONS_VALUE};
use crate::context::ServiceContext;
use crate::template::Template;

/// The baseline environment variables, in injection order.
///
/// Values are typed the way the template expects them: strings for names and
/// levels, a number for the connection-reuse toggle and the sample rate, a
/// boolean for the error-suppression flag.
#[must_use]
pub fn standard_env_vars(
    config: &PluginConfig,
    context: &ServiceContext,
) -> Vec<(&'static str, Value)> {
    let tag_data = |name: &str| -> Value {
        json!(config.resource_tags_data.get(name).cloned().unwrap_or_default())
    };

    vec![
        ("AGP_APP_NAME", json!(context.app_name)),
        ("AGP_SERVICE_NAME", json!(context.service_name)),
        ("AGP_APP_ENV", json!(context.app_stage)),
        ("AGP_APP_ROLE", tag_data("AppRole")),
        ("AGP_APP_ACCOUNT_ID", json!(ACCOUNT_ID_PLACEHOLDER)),
        ("AGP_APP_REGION", json!(context.region)),
        ("AGP_APP_VERSION", tag_data("AppVersion")),
        ("AWS_NODEJS_CONNECTION_REUSE_ENABLED", json!(1)),
        ("LOG_LEVEL", json!(config.logger_log_level)),
        ("NODE_OPTIONS", json!(NODE_OPTIONS_VALUE)),
        ("POWERTOOLS_IGNORE_ERRORS", json!(true)),
        ("SAMPLE_DEBUG_LOG_RATE", json!(config.logger_debug_sample_rate)),
    ]
}

/// Stage: merge the standard environment variables into the template.
///
/// Creates `provider.environment` when absent. Guarded by
/// `setStandardEnvVars`; when disabled the template passes through untouched.
pub fn inject_env_vars(
    mut template: Template,
    config: &PluginConfig,
    context: &ServiceContext,
) -> Result<Template> {
    if !config.set_standard_env_vars {
        debug!("Standard environment variables are disabled, skipping ...");
        return Ok(template);
    }

    info!("Setting baseline environment variables ...");
    let environment = template.provider_environment_mut();
    for (name, value) in standard_env_vars(config, context) {
        info!("... {name} to: {value}");
        environment.insert(name.to_string(), value);
    }
    Ok(template)
}
