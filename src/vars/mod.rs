//! Custom variable resolution
//!
//! The `agp:` variable source derives two name strings from the service name,
//! stage, and region. The three upstream values are obtained through the
//! caller's own asynchronous [`VariableResolver`], so the derivation is a
//! pure function of its resolved inputs and is safe to invoke any number of
//! times per deployment.
//!
//! Supported addresses:
//! - `sls-default-name` resolves to `"<service>-<stage>"`
//! - `sls-regional-name` resolves to `"<service>-<stage>-<region>"`
//!
//! Any other address, or a failure to resolve the upstream values, yields
//! [`AgpError::UnresolvedCustomVariable`].

use anyhow::Result;
use tracing::debug;

use crate::constants::{UPSTREAM_REGION, UPSTREAM_SERVICE, UPSTREAM_STAGE};
use crate::core::AgpError;
use crate::descriptor::ServiceDescriptor;

/// Address resolving to `"<service>-<stage>"`.
pub const DEFAULT_NAME: &str = "sls-default-name";

/// Address resolving to `"<service>-<stage>-<region>"`.
pub const REGIONAL_NAME: &str = "sls-regional-name";

/// Upstream variable lookup supplied by the caller.
///
/// During a hosted deployment this is backed by the framework's own
/// interpolation engine; offline, [`DescriptorResolver`] answers from a
/// parsed descriptor.
pub trait VariableResolver {
    /// Resolve one upstream address (e.g. `self:service`) to its value.
    fn resolve_variable(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Resolve one `agp:` address to its derived name string.
///
/// Resolves the three upstream values first, then derives the requested
/// name. No state is shared between calls.
pub async fn resolve_custom_variable(
    address: &str,
    resolver: &impl VariableResolver,
) -> Result<String, AgpError> {
    let unresolved = |_| AgpError::UnresolvedCustomVariable {
        address: address.to_string(),
    };
    let service_name = resolver
        .resolve_variable(UPSTREAM_SERVICE)
        .await
        .map_err(unresolved)?;
    let stage = resolver
        .resolve_variable(UPSTREAM_STAGE)
        .await
        .map_err(unresolved)?;
    let region = resolver
        .resolve_variable(UPSTREAM_REGION)
        .await
        .map_err(unresolved)?;

    debug!("Resolving custom variable \"{address}\" for {service_name}/{stage}/{region}");
    match address {
        DEFAULT_NAME => Ok(format!("{service_name}-{stage}")),
        REGIONAL_NAME => Ok(format!("{service_name}-{stage}-{region}")),
        _ => Err(AgpError::UnresolvedCustomVariable {
            address: address.to_string(),
        }),
    }
}

/// [`VariableResolver`] backed by a parsed descriptor, for offline use.
#[derive(Debug, Clone)]
pub struct DescriptorResolver<'a> {
    descriptor: &'a ServiceDescriptor,
}

impl<'a> DescriptorResolver<'a> {
    /// Wrap a descriptor as an upstream resolver.
    #[must_use]
    pub const fn new(descriptor: &'a ServiceDescriptor) -> Self {
        Self { descriptor }
    }
}

impl VariableResolver for DescriptorResolver<'_> {
    async fn resolve_variable(&self, address: &str) -> Result<String> {
        match address {
            UPSTREAM_SERVICE => Ok(self.descriptor.service.clone()),
            UPSTREAM_STAGE => Ok(self.descriptor.provider.stage.clone()),
            UPSTREAM_REGION => Ok(self.descriptor.provider.region.clone()),
            other => anyhow::bail!("unknown upstream variable \"{other}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_descriptor() -> ServiceDescriptor {
        serde_json::from_value(json!({
            "service": "svc",
            "provider": { "stage": "dev", "region": "us-east-1" }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn resolves_default_name() {
        let descriptor = test_descriptor();
        let resolver = DescriptorResolver::new(&descriptor);
        let value = resolve_custom_variable(DEFAULT_NAME, &resolver).await.unwrap();
        assert_eq!(value, "svc-dev");
    }

    #[tokio::test]
    async fn resolves_regional_name() {
        let descriptor = test_descriptor();
        let resolver = DescriptorResolver::new(&descriptor);
        let value = resolve_custom_variable(REGIONAL_NAME, &resolver)
            .await
            .unwrap();
        assert_eq!(value, "svc-dev-us-east-1");
    }

    #[tokio::test]
    async fn unknown_address_fails_with_listing() {
        let descriptor = test_descriptor();
        let resolver = DescriptorResolver::new(&descriptor);
        let err = resolve_custom_variable("unknown", &resolver)
            .await
            .unwrap_err();
        assert!(matches!(err, AgpError::UnresolvedCustomVariable { ref address } if address == "unknown"));
        assert!(err.to_string().contains("agp:sls-default-name"));
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_unresolved_variable() {
        struct FailingResolver;
        impl VariableResolver for FailingResolver {
            async fn resolve_variable(&self, _address: &str) -> Result<String> {
                anyhow::bail!("upstream engine offline")
            }
        }
        let err = resolve_custom_variable(DEFAULT_NAME, &FailingResolver)
            .await
            .unwrap_err();
        assert!(matches!(err, AgpError::UnresolvedCustomVariable { .. }));
    }

    #[tokio::test]
    async fn repeated_calls_are_independent() {
        let descriptor = test_descriptor();
        let resolver = DescriptorResolver::new(&descriptor);
        let first = resolve_custom_variable(DEFAULT_NAME, &resolver).await.unwrap();
        let second = resolve_custom_variable(DEFAULT_NAME, &resolver).await.unwrap();
        assert_eq!(first, second);
    }
}
