//! Account-id placeholder resolution
//!
//! A generic depth-first walk over the finalized template tree. Every string
//! leaf equal to the placeholder sentinel becomes the provider-native
//! account-id reference expression; composite nodes recurse into their
//! children with sibling order preserved. The walk knows nothing about tags
//! or environment variables, so any future sentinel-bearing value resolves
//! without code changes here.

use anyhow::Result;
use serde_json::{Value, json};

use crate::config::PluginConfig;
use crate::constants::ACCOUNT_ID_PLACEHOLDER;
use crate::context::ServiceContext;
use crate::template::Template;

/// The provider-native reference expression for the current account id.
#[must_use]
pub fn account_id_ref() -> Value {
    json!({ "Ref": "AWS::AccountId" })
}

/// Replace every placeholder occurrence in a tree.
///
/// The tree is finite and acyclic (it originates from serialized document
/// data), so the recursion terminates. Idempotent when no sentinel occurs.
#[must_use]
pub fn resolve_placeholders(value: Value) -> Value {
    match value {
        Value::String(s) if s == ACCOUNT_ID_PLACEHOLDER => account_id_ref(),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(resolve_placeholders).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| (key, resolve_placeholders(child)))
                .collect(),
        ),
        scalar @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)) => scalar,
    }
}

/// Stage: resolve account-id placeholders across the whole template.
///
/// Runs last so placeholders introduced by earlier stages (or by user
/// configuration) are all resolved in one pass.
pub fn resolve_account_id_placeholders(
    template: Template,
    _config: &PluginConfig,
    _context: &ServiceContext,
) -> Result<Template> {
    Template::from_value(resolve_placeholders(template.into_value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_sentinel_at_any_depth() {
        let input = json!({
            "Resources": {
                "Fn": {
                    "Properties": {
                        "Environment": { "Variables": { "AGP_APP_ACCOUNT_ID": "#{AWS_ACCOUNT_ID}#" } },
                        "Tags": [ { "Key": "AccountId", "Value": "#{AWS_ACCOUNT_ID}#" } ]
                    }
                }
            }
        });
        let resolved = resolve_placeholders(input);
        assert_eq!(
            resolved["Resources"]["Fn"]["Properties"]["Environment"]["Variables"]
                ["AGP_APP_ACCOUNT_ID"],
            account_id_ref()
        );
        assert_eq!(
            resolved["Resources"]["Fn"]["Properties"]["Tags"][0]["Value"],
            account_id_ref()
        );
    }

    #[test]
    fn idempotent_without_sentinels() {
        let input = json!({
            "a": [1, 2, { "b": "plain" }],
            "c": null,
            "d": true,
            "e": "AWS_ACCOUNT_ID"
        });
        assert_eq!(resolve_placeholders(input.clone()), input);
    }

    #[test]
    fn does_not_touch_partial_matches() {
        let input = json!({ "v": "prefix #{AWS_ACCOUNT_ID}# suffix" });
        // Only exact leaf equality triggers replacement.
        assert_eq!(resolve_placeholders(input.clone()), input);
    }

    #[test]
    fn preserves_sequence_order() {
        let input = json!(["a", "#{AWS_ACCOUNT_ID}#", "b"]);
        let resolved = resolve_placeholders(input);
        assert_eq!(resolved[0], json!("a"));
        assert_eq!(resolved[1], account_id_ref());
        assert_eq!(resolved[2], json!("b"));
    }
}
