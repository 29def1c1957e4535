//! Standard resource tags
//!
//! Computes the stack-level tag list and attaches it to every supported
//! resource in the compiled template. Precedence is strictly most-specific
//! wins: per-resource explicit tags beat stack-level manual tags, which beat
//! computed standard tags.
//!
//! The computed list is seeded from `provider.stackTags` (those keys are
//! recorded as manual and never overridden), then extended with the standard
//! tag set overlaid with `resourceTagsData`. User entries under names outside
//! the standard set become additional tags.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{info, warn};

use crate::config::PluginConfig;
use crate::context::ServiceContext;
use crate::placeholder::account_id_ref;
use crate::template::Template;

/// The standard tag names, in the order they are attached.
pub const STANDARD_TAG_NAMES: [&str; 12] = [
    "Business",
    "Department",
    "Subdepartment",
    "Maintainers",
    "CostCenter",
    "AppName",
    "ServiceName",
    "AppVersion",
    "AppEnv",
    "AppRole",
    "AppAccountId",
    "AppRegion",
];

/// Resource types that receive standard tags.
const SUPPORTED_TYPES: [&str; 10] = [
    "AWS::ApiGateway::Stage",
    "AWS::CloudFront::Distribution",
    "AWS::DynamoDB::Table",
    "AWS::Events::EventBus",
    "AWS::IAM::Role",
    "AWS::Kinesis::Stream",
    "AWS::Lambda::Function",
    "AWS::Logs::LogGroup",
    "AWS::S3::Bucket",
    "AWS::SQS::Queue",
];

/// A single `{Key, Value}` tag entry.
///
/// Values are usually strings, but the computed `AppAccountId` tag carries
/// the account-id reference expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag key, prefixed when a prefix is configured.
    #[serde(rename = "Key")]
    pub key: String,
    /// Tag value.
    #[serde(rename = "Value")]
    pub value: Value,
}

/// The allow-list of taggable resource types, including configured extras.
#[must_use]
pub fn supported_resource_types(config: &PluginConfig) -> Vec<String> {
    SUPPORTED_TYPES
        .iter()
        .map(ToString::to_string)
        .chain(config.resource_tags_additional_types.iter().cloned())
        .collect()
}

/// The standard tag set as ordered `(name, value)` pairs: fixed defaults
/// overlaid with `resourceTagsData`, user overrides winning. Names outside
/// the standard set are appended after it.
fn standard_tag_values(config: &PluginConfig, context: &ServiceContext) -> Vec<(String, Value)> {
    let mut values: Vec<(String, Value)> = vec![
        ("Business".to_string(), json!("")),
        ("Department".to_string(), json!("")),
        ("Subdepartment".to_string(), json!("")),
        ("Maintainers".to_string(), json!("")),
        ("CostCenter".to_string(), json!("")),
        ("AppName".to_string(), json!(context.app_name)),
        ("ServiceName".to_string(), json!(context.service_name)),
        ("AppVersion".to_string(), json!("")),
        ("AppEnv".to_string(), json!(context.app_stage)),
        ("AppRole".to_string(), json!("")),
        ("AppAccountId".to_string(), account_id_ref()),
        ("AppRegion".to_string(), json!(context.region)),
    ];

    for (name, value) in &config.resource_tags_data {
        match values.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = json!(value),
            None => values.push((name.clone(), json!(value))),
        }
    }
    values
}

/// Compute the stack-level tag list.
///
/// Seeded from the user's stack tags (`manual` keys, which always win), then
/// extended with every standard tag whose label is not already declared.
#[must_use]
pub fn compute_stack_tags(
    config: &PluginConfig,
    context: &ServiceContext,
    stack_tags: &Map<String, Value>,
) -> Vec<Tag> {
    let mut tag_list: Vec<Tag> = stack_tags
        .iter()
        .map(|(key, value)| Tag {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();
    let manual_keys: Vec<String> = tag_list.iter().map(|tag| tag.key.clone()).collect();

    info!("The following is the standard list of resource tags computed ...");
    for (name, value) in standard_tag_values(config, context) {
        let label = if config.resource_tags_prefix.is_empty() {
            name
        } else {
            format!("{}:{}", config.resource_tags_prefix, name)
        };
        if manual_keys.contains(&label) {
            continue;
        }
        info!("... \"{label}\" = {value}");
        tag_list.push(Tag { key: label, value });
    }
    tag_list
}

/// Stage: attach the computed tag list to every supported resource.
///
/// Resources outside the allow-list are reported informationally and left
/// untouched; supported resources without a `Properties` mapping are skipped.
pub fn apply_standard_tags(
    mut template: Template,
    config: &PluginConfig,
    context: &ServiceContext,
) -> Result<Template> {
    if !config.set_standard_resource_tags {
        info!("Create standard resource tags is disabled, skipping ...");
        return Ok(template);
    }

    let descriptor = template.descriptor()?;
    let tag_list = compute_stack_tags(config, context, &descriptor.provider.stack_tags);
    let supported = supported_resource_types(config);

    info!("Adding standard resource tags to the following resources ...");
    let Some(resources) = template.resources_mut() else {
        warn!("... template carries no \"Resources\" section, nothing to tag");
        return Ok(template);
    };

    for (resource_name, resource) in resources.iter_mut() {
        let resource_type = resource
            .get("Type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if supported.contains(&resource_type) && !tag_list.is_empty() {
            if let Some(properties) = resource.get_mut("Properties").and_then(Value::as_object_mut)
            {
                info!("... {resource_type} ({resource_name})");
                merge_resource_tags(properties, &tag_list);
            }
        } else {
            info!("...    INFO ... Not adding tags to resource {resource_type} ({resource_name})");
        }
    }
    Ok(template)
}

/// Merge the stack-level tag list into one resource's `Tags` property.
///
/// No `Tags` property: the computed list is set directly. Existing list:
/// only entries whose key is absent are appended, so per-resource tags keep
/// their values.
fn merge_resource_tags(properties: &mut Map<String, Value>, tag_list: &[Tag]) {
    let computed = serde_json::to_value(tag_list).unwrap_or_else(|_| json!([]));
    match properties.get_mut("Tags") {
        Some(Value::Array(existing)) => {
            // Snapshot the pre-merge key set; appended entries must not
            // suppress later computed tags.
            let existing_keys: Vec<String> = existing
                .iter()
                .filter_map(|entry| entry.get("Key").and_then(Value::as_str))
                .map(String::from)
                .collect();
            for tag in tag_list {
                if !existing_keys.contains(&tag.key) {
                    existing.push(json!(tag));
                }
            }
        }
        _ => {
            properties.insert("Tags".to_string(), computed);
        }
    }
}
