//! Deployment context snapshot
//!
//! Four values read once from the resolved descriptor and treated as an
//! immutable snapshot for the rest of the run.

use crate::descriptor::ServiceDescriptor;

/// Immutable context values drawn from the service descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceContext {
    /// Application name (descriptor `app`, empty when not declared).
    pub app_name: String,
    /// Deployment stage (`provider.stage`).
    pub app_stage: String,
    /// Service name (descriptor `service`).
    pub service_name: String,
    /// Deployment region (`provider.region`).
    pub region: String,
}

impl ServiceContext {
    /// Snapshot the context values out of a resolved descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: &ServiceDescriptor) -> Self {
        Self {
            app_name: descriptor.app.clone(),
            app_stage: descriptor.provider.stage.clone(),
            service_name: descriptor.service.clone(),
            region: descriptor.provider.region.clone(),
        }
    }
}
