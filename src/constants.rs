//! Global constants used throughout the AGP conventions codebase.
//!
//! Fixed names and sentinel values shared by several modules: the tool
//! name used to prefix operator-facing messages, the descriptor section
//! the configuration is read from, and the account-id placeholder that
//! ties the environment-variable stage to the placeholder stage.

/// Human-readable tool name, prefixed onto operator-facing messages and errors.
pub const TOOL_NAME: &str = "AGP Conventions";

/// Name of the descriptor `custom` section holding the plugin configuration.
pub const CONFIG_SECTION: &str = "awsGoodPractices";

/// Sentinel written into environment-variable values that cannot be known
/// until the template is fully compiled. The placeholder stage replaces every
/// occurrence with the account-id reference expression.
///
/// The `#{...}#` framing cannot appear in a legitimate CloudFormation value,
/// so the token never collides with user data.
pub const ACCOUNT_ID_PLACEHOLDER: &str = "#{AWS_ACCOUNT_ID}#";

/// Variable-source prefix under which the custom resolver is registered.
pub const VARIABLE_SOURCE: &str = "agp";

/// Upstream address of the service name, resolved through the host resolver.
pub const UPSTREAM_SERVICE: &str = "self:service";

/// Upstream address of the deployment stage.
pub const UPSTREAM_STAGE: &str = "sls:stage";

/// Upstream address of the deployment region.
pub const UPSTREAM_REGION: &str = "self:provider.region";

/// Fixed Node.js runtime-tuning flags set on every function.
pub const NODE_OPTIONS_VALUE: &str = "--enable-source-maps --stack-trace-limit=1000";
