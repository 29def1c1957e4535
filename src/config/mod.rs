//! Plugin configuration resolution
//!
//! The configuration lives in the `custom.awsGoodPractices` section of the
//! deployment descriptor. Every option is optional: user input is overlaid
//! onto a fixed default set, so an absent section yields a fully-populated
//! default configuration and there are no error conditions beyond a
//! malformed section.
//!
//! Recognized options:
//!
//! | Option | Type | Default |
//! |--------|------|---------|
//! | `setStandardResourceTags` | bool | `true` |
//! | `setStandardEnvVars` | bool | `true` |
//! | `checkDeploymentBucketConfig` | bool | `true` |
//! | `loggerLogLevel` | string | `"INFO"` |
//! | `loggerDebugSampleRate` | float | `0.01` |
//! | `resourceTagsPrefix` | string | `"agp"` |
//! | `resourceTagsData` | mapping | `{}` |
//! | `resourceTagsAdditionalTypes` | sequence | `[]` |
//!
//! One derived field is fixed up after the overlay:
//! `resourceTagsData.CostCenter` falls back to `resourceTagsData.Department`
//! when unset or empty.

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::constants::CONFIG_SECTION;
use crate::core::AgpError;
use crate::descriptor::ServiceDescriptor;

/// Resolved plugin configuration.
///
/// Created once per run and immutable afterwards; the only mutation is the
/// `CostCenter` fallback applied by [`PluginConfig::resolve`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    /// Enables computation and attachment of standard resource tags.
    ///
    /// `createStandardResourceTags` is accepted as a legacy alias; earlier
    /// releases read that spelling while documenting this one.
    #[serde(alias = "createStandardResourceTags")]
    pub set_standard_resource_tags: bool,

    /// Enables injection of standard environment variables.
    pub set_standard_env_vars: bool,

    /// Escalates a deployment-bucket convention mismatch from a report to a
    /// hard failure.
    pub check_deployment_bucket_config: bool,

    /// Value injected as the `LOG_LEVEL` environment variable.
    pub logger_log_level: String,

    /// Value injected as the `SAMPLE_DEBUG_LOG_RATE` environment variable,
    /// in the range 0 to 1.
    pub logger_debug_sample_rate: f64,

    /// Prefix for computed tag keys (`"<prefix>:<name>"`); empty disables
    /// prefixing.
    pub resource_tags_prefix: String,

    /// Tag name to value overrides; user entries win over computed defaults,
    /// and names outside the standard set become additional tags.
    pub resource_tags_data: BTreeMap<String, String>,

    /// Extra resource types to tag beyond the built-in allow-list.
    pub resource_tags_additional_types: Vec<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            set_standard_resource_tags: true,
            set_standard_env_vars: true,
            check_deployment_bucket_config: true,
            logger_log_level: "INFO".to_string(),
            logger_debug_sample_rate: 0.01,
            resource_tags_prefix: "agp".to_string(),
            resource_tags_data: BTreeMap::new(),
            resource_tags_additional_types: Vec::new(),
        }
    }
}

impl PluginConfig {
    /// Read the configuration from the descriptor's custom section.
    ///
    /// An absent section yields the defaults; a present section is overlaid
    /// onto them. Unrecognized options are tolerated and ignored.
    pub fn from_descriptor(descriptor: &ServiceDescriptor) -> Result<Self> {
        let config = match descriptor.custom.get(CONFIG_SECTION) {
            None => Self::default(),
            Some(section) => {
                serde_json::from_value(section.clone()).map_err(|e| AgpError::ConfigError {
                    section: CONFIG_SECTION.to_string(),
                    reason: e.to_string(),
                })?
            }
        };
        Ok(config.resolve())
    }

    /// Apply derived-field fixups after the defaults overlay.
    ///
    /// `CostCenter` falls back to `Department` when unset or empty; when both
    /// are unset the key stays absent.
    #[must_use]
    pub fn resolve(mut self) -> Self {
        let cost_center_unset = self
            .resource_tags_data
            .get("CostCenter")
            .is_none_or(String::is_empty);
        if cost_center_unset {
            match self.resource_tags_data.get("Department").cloned() {
                Some(department) => {
                    self.resource_tags_data
                        .insert("CostCenter".to_string(), department);
                }
                None => {
                    self.resource_tags_data.remove("CostCenter");
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor_with_section(section: serde_json::Value) -> ServiceDescriptor {
        let doc = json!({
            "service": "svc",
            "provider": { "stage": "dev", "region": "us-east-1" },
            "custom": { "awsGoodPractices": section }
        });
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn defaults_apply_when_section_absent() {
        let descriptor = ServiceDescriptor::default();
        let config = PluginConfig::from_descriptor(&descriptor).unwrap();
        assert!(config.set_standard_resource_tags);
        assert!(config.set_standard_env_vars);
        assert!(config.check_deployment_bucket_config);
        assert_eq!(config.logger_log_level, "INFO");
        assert_eq!(config.logger_debug_sample_rate, 0.01);
        assert_eq!(config.resource_tags_prefix, "agp");
        assert!(config.resource_tags_data.is_empty());
        assert!(config.resource_tags_additional_types.is_empty());
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let descriptor = descriptor_with_section(json!({
            "loggerLogLevel": "DEBUG",
            "resourceTagsPrefix": "org"
        }));
        let config = PluginConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(config.logger_log_level, "DEBUG");
        assert_eq!(config.resource_tags_prefix, "org");
        assert!(config.check_deployment_bucket_config);
        assert_eq!(config.logger_debug_sample_rate, 0.01);
    }

    #[test]
    fn cost_center_falls_back_to_department() {
        let descriptor = descriptor_with_section(json!({
            "resourceTagsData": { "Department": "X" }
        }));
        let config = PluginConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(
            config.resource_tags_data.get("CostCenter"),
            Some(&"X".to_string())
        );
    }

    #[test]
    fn cost_center_absent_when_both_unset() {
        let descriptor = descriptor_with_section(json!({
            "resourceTagsData": { "Business": "retail" }
        }));
        let config = PluginConfig::from_descriptor(&descriptor).unwrap();
        assert!(!config.resource_tags_data.contains_key("CostCenter"));
    }

    #[test]
    fn explicit_cost_center_is_kept() {
        let descriptor = descriptor_with_section(json!({
            "resourceTagsData": { "CostCenter": "CC-42", "Department": "X" }
        }));
        let config = PluginConfig::from_descriptor(&descriptor).unwrap();
        assert_eq!(
            config.resource_tags_data.get("CostCenter"),
            Some(&"CC-42".to_string())
        );
    }

    #[test]
    fn legacy_tag_flag_alias_is_recognized() {
        let descriptor = descriptor_with_section(json!({
            "createStandardResourceTags": false
        }));
        let config = PluginConfig::from_descriptor(&descriptor).unwrap();
        assert!(!config.set_standard_resource_tags);
    }

    #[test]
    fn malformed_section_is_rejected() {
        let descriptor = descriptor_with_section(json!({
            "loggerDebugSampleRate": "not-a-number"
        }));
        let err = PluginConfig::from_descriptor(&descriptor).unwrap_err();
        assert!(err.to_string().contains("awsGoodPractices"));
    }
}
