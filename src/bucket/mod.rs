//! Deployment-bucket convention check
//!
//! A single shared deployment bucket per account keeps redeployments from
//! leaving one-off buckets behind. The recommended settings are fixed; the
//! live `provider.deploymentBucket` fragment is compared against them by deep
//! structural equality. A mismatch is always reported field-by-field; whether
//! it also fails the run depends on `checkDeploymentBucketConfig`.

use anyhow::Result;
use colored::Colorize;
use serde_json::{Map, Value, json};
use tracing::{info, warn};

use crate::config::PluginConfig;
use crate::core::AgpError;
use crate::descriptor::ServiceDescriptor;

/// The recommended deployment-bucket settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentBucketConvention {
    /// Bucket-name template; account id and region are resolved by the host.
    pub name: String,
    /// Server-side encryption algorithm.
    pub server_side_encryption: String,
    /// Whether public access is blocked.
    pub block_public_access: bool,
}

impl DeploymentBucketConvention {
    /// The fixed organization-wide recommendation.
    #[must_use]
    pub fn recommended() -> Self {
        Self {
            name: "serverless-deployment-bucket-account-${aws:accountId}-${aws:region}"
                .to_string(),
            server_side_encryption: "AES256".to_string(),
            block_public_access: true,
        }
    }

    /// The convention as a generic mapping, for structural comparison
    /// against the live fragment.
    #[must_use]
    pub fn as_value(&self) -> Value {
        json!({
            "name": self.name,
            "serverSideEncryption": self.server_side_encryption,
            "blockPublicAccess": self.block_public_access,
        })
    }
}

/// Compare the live deployment-bucket fragment against the recommendation.
///
/// On match, reports success. On mismatch, prints the recommended settings
/// field-by-field; then fails with [`AgpError::ConfigurationViolation`] when
/// `checkDeploymentBucketConfig` is enabled, or reports only when it is not.
/// One-shot: no retries, no recovery.
pub fn evaluate_deployment_bucket(
    descriptor: &ServiceDescriptor,
    config: &PluginConfig,
) -> Result<()> {
    info!("Evaluating configuration good practices and conventions ...");
    info!("... Reviewing \"provider.deploymentBucket\" settings");

    let convention = DeploymentBucketConvention::recommended();
    let current = descriptor
        .provider
        .deployment_bucket
        .clone()
        .unwrap_or_else(|| Value::Object(Map::new()));

    if convention.as_value() == current {
        info!("... OK");
        return Ok(());
    }

    warn!(
        "{}",
        "\"provider.deploymentBucket\" does not match the recommended configuration; recommended settings are:"
            .reversed()
    );
    for (key, value) in recommendation_fields(&convention) {
        warn!("{}", format!("...   {key} = {value}").reversed());
    }

    if config.check_deployment_bucket_config {
        return Err(AgpError::ConfigurationViolation.into());
    }
    Ok(())
}

/// Recommended settings as ordered `(field, rendered value)` pairs.
#[must_use]
pub fn recommendation_fields(convention: &DeploymentBucketConvention) -> Vec<(String, String)> {
    vec![
        ("name".to_string(), convention.name.clone()),
        (
            "serverSideEncryption".to_string(),
            convention.server_side_encryption.clone(),
        ),
        (
            "blockPublicAccess".to_string(),
            convention.block_public_access.to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor_with_bucket(bucket: Option<Value>) -> ServiceDescriptor {
        let mut doc = json!({
            "service": "svc",
            "provider": { "stage": "dev", "region": "us-east-1" }
        });
        if let Some(bucket) = bucket {
            doc["provider"]["deploymentBucket"] = bucket;
        }
        serde_json::from_value(doc).unwrap()
    }

    fn matching_bucket() -> Value {
        json!({
            "name": "serverless-deployment-bucket-account-${aws:accountId}-${aws:region}",
            "serverSideEncryption": "AES256",
            "blockPublicAccess": true
        })
    }

    #[test]
    fn matching_config_never_fails() {
        let descriptor = descriptor_with_bucket(Some(matching_bucket()));
        for enforce in [true, false] {
            let config = PluginConfig {
                check_deployment_bucket_config: enforce,
                ..PluginConfig::default()
            };
            assert!(evaluate_deployment_bucket(&descriptor, &config).is_ok());
        }
    }

    #[test]
    fn mismatch_fails_when_enforced() {
        let descriptor = descriptor_with_bucket(Some(json!({ "name": "my-own-bucket" })));
        let config = PluginConfig::default();
        let err = evaluate_deployment_bucket(&descriptor, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AgpError>(),
            Some(AgpError::ConfigurationViolation)
        ));
    }

    #[test]
    fn mismatch_reports_only_when_not_enforced() {
        let descriptor = descriptor_with_bucket(Some(json!({ "name": "my-own-bucket" })));
        let config = PluginConfig {
            check_deployment_bucket_config: false,
            ..PluginConfig::default()
        };
        assert!(evaluate_deployment_bucket(&descriptor, &config).is_ok());
    }

    #[test]
    fn absent_bucket_counts_as_mismatch() {
        let descriptor = descriptor_with_bucket(None);
        let config = PluginConfig::default();
        assert!(evaluate_deployment_bucket(&descriptor, &config).is_err());
    }

    #[test]
    fn extra_fields_break_the_match() {
        let mut bucket = matching_bucket();
        bucket["versioning"] = json!(true);
        let descriptor = descriptor_with_bucket(Some(bucket));
        let config = PluginConfig::default();
        assert!(evaluate_deployment_bucket(&descriptor, &config).is_err());
    }

    #[test]
    fn recommendation_lists_all_three_fields() {
        let fields = recommendation_fields(&DeploymentBucketConvention::recommended());
        let keys: Vec<_> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"name"));
        assert!(keys.contains(&"serverSideEncryption"));
        assert!(keys.contains(&"blockPublicAccess"));
    }
}
