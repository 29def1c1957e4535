//! Deployment template tree
//!
//! [`Template`] wraps the whole deployment document: the descriptor-level
//! mappings (`provider`, `custom`) and the compiled `Resources` section. The
//! tree is a closed set of variants (scalar, mapping, sequence) modeled with
//! [`serde_json::Value`], which keeps the recursive passes exhaustive. Ownership
//! is explicit: stage functions take the template by value and hand it back,
//! nothing captures it in shared state.
//!
//! Typed accessors below replace the original dotted-path lookups; each one
//! documents its policy for absent intermediate nodes.

use anyhow::Result;
use serde_json::{Map, Value};

use crate::core::AgpError;
use crate::descriptor::ServiceDescriptor;

/// The deployment document tree.
///
/// The root is always a mapping; construction rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Template(Value);

impl Template {
    /// Wrap an already-parsed document.
    ///
    /// Fails unless the root is a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(AgpError::DocumentParseError {
                file: "<value>".to_string(),
                reason: "document root must be a mapping".to_string(),
            }
            .into())
        }
    }

    /// Parse a document from YAML or JSON text.
    ///
    /// YAML is a superset of JSON, so a single parser covers both on-disk
    /// formats. `file` is only used in error messages.
    pub fn parse_str(contents: &str, file: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(contents).map_err(|e| {
            anyhow::Error::from(AgpError::DocumentParseError {
                file: file.to_string(),
                reason: e.to_string(),
            })
        })?;
        Self::from_value(value).map_err(|_| {
            AgpError::DocumentParseError {
                file: file.to_string(),
                reason: "document root must be a mapping".to_string(),
            }
            .into()
        })
    }

    /// Deserialize the typed descriptor view of this document.
    pub fn descriptor(&self) -> Result<ServiceDescriptor> {
        let descriptor = serde_json::from_value(self.0.clone())?;
        Ok(descriptor)
    }

    /// Borrow the underlying tree.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying tree.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Render the finalized document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        let rendered = serde_json::to_string_pretty(&self.0)?;
        Ok(rendered)
    }

    /// Mutable access to `provider.environment`, creating the path if absent.
    ///
    /// A pre-existing non-mapping node at either level is replaced by a
    /// mapping; the environment block has no other legal shape.
    pub fn provider_environment_mut(&mut self) -> &mut Map<String, Value> {
        let root = self.0.as_object_mut().expect("root is a mapping");
        let provider = ensure_mapping_entry(root, "provider");
        ensure_mapping_entry(provider, "environment")
    }

    /// The compiled `Resources` mapping, when present.
    #[must_use]
    pub fn resources(&self) -> Option<&Map<String, Value>> {
        self.0.get("Resources").and_then(Value::as_object)
    }

    /// Mutable access to the compiled `Resources` mapping, when present.
    pub fn resources_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.0.get_mut("Resources").and_then(Value::as_object_mut)
    }
}

/// Get the mapping stored under `key`, inserting an empty one when the entry
/// is absent or not a mapping.
fn ensure_mapping_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let entry = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    entry.as_object_mut().expect("entry was just made a mapping")
}
