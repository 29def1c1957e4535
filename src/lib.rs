//! AGP Conventions - deployment-template convention post-processor
//!
//! Injects organization-wide conventions into a compiled deployment template
//! just before it is finalized and handed to the cloud provider: standard
//! resource tags, standard environment variables, deployment-bucket policy
//! checks, and `agp:` custom-variable resolution.
//!
//! # Architecture Overview
//!
//! The work is an ordered sequence of transformations over the in-memory
//! document tree:
//!
//! 1. Configuration is resolved once from the descriptor's
//!    `custom.awsGoodPractices` section ([`config`]).
//! 2. The deployment-bucket settings are compared against the recommended
//!    convention ([`bucket`]).
//! 3. Standard environment variables are merged into the provider
//!    environment block ([`env_vars`]).
//! 4. The standard tag list is computed and attached to every supported
//!    resource ([`tags`]).
//! 5. A generic depth-first walk replaces the account-id placeholder with
//!    the provider-native reference expression ([`placeholder`]). It runs
//!    last so sentinels introduced by earlier stages resolve in one pass.
//!
//! Stages 3 to 5 are exposed as a typed, ordered pipeline ([`pipeline`]):
//! each stage takes the template by value and hands it back, so ownership
//! stays explicit and nothing mutates shared state. The `agp:` variable
//! resolver ([`vars`]) sits outside the pipeline; the host's interpolation
//! engine (or the CLI `resolve` command) invokes it on its own schedule.
//!
//! # Core Modules
//!
//! - [`cli`] - command-line orchestrator (`check`, `finalize`, `resolve`)
//! - [`core`] - error types and user-friendly error reporting
//! - [`config`] - plugin configuration with defaults and derived fields
//! - [`descriptor`] - typed view of the deployment document
//! - [`template`] - the document tree and its typed accessors
//! - [`bucket`] - deployment-bucket convention check
//! - [`env_vars`] - standard environment variables
//! - [`tags`] - standard resource tags
//! - [`placeholder`] - account-id placeholder resolution
//! - [`vars`] - `agp:` custom variable resolution
//! - [`pipeline`] - the named, ordered finalization stages
//!
//! # Example
//!
//! ```rust
//! use agp_conventions::config::PluginConfig;
//! use agp_conventions::context::ServiceContext;
//! use agp_conventions::pipeline::run_finalize_stages;
//! use agp_conventions::template::Template;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = Template::from_value(json!({
//!     "service": "checkout",
//!     "provider": { "stage": "dev", "region": "us-east-1" },
//!     "Resources": {
//!         "Fn": { "Type": "AWS::Lambda::Function", "Properties": {} }
//!     }
//! }))?;
//! let descriptor = template.descriptor()?;
//! let config = PluginConfig::from_descriptor(&descriptor)?;
//! let context = ServiceContext::from_descriptor(&descriptor);
//!
//! let finalized = run_finalize_stages(template, &config, &context)?;
//! assert!(finalized.as_value()["provider"]["environment"]["AGP_APP_NAME"].is_string());
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

// Document model
pub mod context;
pub mod descriptor;
pub mod template;

// Convention stages
pub mod bucket;
pub mod env_vars;
pub mod placeholder;
pub mod tags;

// Variable resolution and orchestration
pub mod pipeline;
pub mod vars;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
