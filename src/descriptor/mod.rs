//! Typed view of the deployment document
//!
//! The deployment document is a heterogeneous tree owned by the caller; the
//! crate never walks it with dotted-path strings. Instead, the fields the
//! conventions need are deserialized once into [`ServiceDescriptor`], a
//! strongly-typed snapshot with a documented default for every absent field.
//! The rest of the tree stays generic and is transformed through
//! [`crate::template::Template`].

use serde::Deserialize;
use serde_json::{Map, Value};

/// Typed snapshot of the descriptor-level fields the conventions read.
///
/// Unknown fields are tolerated; the document routinely carries far more
/// than this (functions, resources, plugin sections for other tools).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceDescriptor {
    /// Application name the service belongs to.
    pub app: String,
    /// Service name.
    pub service: String,
    /// Provider-level settings.
    pub provider: ProviderSettings,
    /// Free-form `custom` section; plugin configurations live here.
    pub custom: Map<String, Value>,
}

/// The `provider` block of the descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderSettings {
    /// Deployment stage (e.g. `dev`, `prod`).
    pub stage: String,
    /// Deployment region (e.g. `us-east-1`).
    pub region: String,
    /// Stack-level tags declared by the user; these always win over
    /// computed standard tags.
    pub stack_tags: Map<String, Value>,
    /// Deployment-bucket configuration fragment, compared against the
    /// recommended convention. `None` when the user declared nothing.
    pub deployment_bucket: Option<Value>,
}
