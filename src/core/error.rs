//! Error handling for AGP Conventions
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code ([`AgpError`])
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!    ([`ErrorContext`], [`user_friendly_error`])
//!
//! Only two failures are fatal by design: a deployment-bucket configuration
//! that violates the recommended convention while enforcement is enabled
//! ([`AgpError::ConfigurationViolation`]), and an unsupported address passed
//! to the custom variable resolver ([`AgpError::UnresolvedCustomVariable`]).
//! Everything else is either defaulted (missing configuration fields) or
//! skipped (unsupported resource types, absent bucket configuration).
//!
//! # Examples
//!
//! ```rust,no_run
//! use agp_conventions::core::{AgpError, user_friendly_error};
//!
//! let error = AgpError::UnresolvedCustomVariable {
//!     address: "unknown".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Colored error with suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::constants::{TOOL_NAME, VARIABLE_SOURCE};

/// The main error type for AGP Conventions operations.
///
/// Each variant represents a specific failure mode with enough context to
/// produce an operator-facing message. Messages are written for end users,
/// not just developers.
#[derive(Error, Debug, Clone)]
pub enum AgpError {
    /// The deployment-bucket configuration does not match the recommended
    /// convention and enforcement (`checkDeploymentBucketConfig`) is enabled.
    #[error(
        "\"provider.deploymentBucket\" does not match the recommended configuration (details above), set \"checkDeploymentBucketConfig = false\" if you prefer to ignore"
    )]
    ConfigurationViolation,

    /// An unsupported address was passed to the custom variable resolver,
    /// or an upstream variable could not be resolved.
    #[error(
        "could not resolve \"{VARIABLE_SOURCE}:{address}\", available options: {VARIABLE_SOURCE}:sls-default-name, {VARIABLE_SOURCE}:sls-regional-name"
    )]
    UnresolvedCustomVariable {
        /// The address that was requested (the part after the `agp:` prefix).
        address: String,
    },

    /// The deployment document could not be parsed.
    #[error("invalid deployment document {file}: {reason}")]
    DocumentParseError {
        /// Path to the document that failed to parse.
        file: String,
        /// Specific reason for the parsing failure.
        reason: String,
    },

    /// The plugin configuration section is present but malformed.
    #[error("invalid \"{section}\" configuration: {reason}")]
    ConfigError {
        /// The descriptor section that failed to parse.
        section: String,
        /// Description of the configuration error.
        reason: String,
    },

    /// A file system operation failed.
    #[error("{message}")]
    FileSystemError {
        /// Operator-facing description naming the file involved.
        message: String,
    },

    /// Generic error wrapper for cases not covered by specific variants.
    #[error("{message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Error with user-friendly context for CLI display.
///
/// Wraps an [`AgpError`] with an optional actionable suggestion and optional
/// details explaining why the error occurred.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error.
    pub error: AgpError,
    /// Optional suggestion for resolving the error.
    pub suggestion: Option<String>,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context wrapping the given error.
    #[must_use]
    pub const fn new(error: AgpError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are actionable steps, displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    ///
    /// Details are displayed in yellow, less prominent than the error itself.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// The error line is prefixed with the tool name so operators can tell
    /// which part of their deployment tooling rejected the document.
    pub fn display(&self) {
        eprintln!("{}: {}: {}", "error".red().bold(), TOOL_NAME, self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", TOOL_NAME, self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`] for CLI display.
///
/// Recognizes [`AgpError`] variants and [`std::io::Error`] kinds and attaches
/// tailored suggestions; everything else is wrapped generically.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(agp_error) = error.downcast_ref::<AgpError>() {
        return create_error_context(agp_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        // The anyhow context from the call site names the document involved.
        let message = format!("{error:#}");
        match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(AgpError::FileSystemError { message })
                    .with_suggestion(
                        "Check that the deployment document exists and the path is correct",
                    );
            }
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(AgpError::FileSystemError { message })
                    .with_suggestion(
                        "Check file ownership and permissions on the deployment document",
                    );
            }
            _ => {}
        }
    }

    ErrorContext::new(AgpError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: AgpError) -> ErrorContext {
    match &error {
        AgpError::ConfigurationViolation => ErrorContext::new(error.clone())
            .with_details(
                "a single, account-wide deployment bucket prevents leaving unused buckets behind",
            )
            .with_suggestion(
                "Adopt the recommended \"provider.deploymentBucket\" settings printed above, or set \"checkDeploymentBucketConfig: false\" to proceed anyway",
            ),
        AgpError::UnresolvedCustomVariable { .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Use \"{VARIABLE_SOURCE}:sls-default-name\" or \"{VARIABLE_SOURCE}:sls-regional-name\""
            )),
        AgpError::DocumentParseError { .. } => ErrorContext::new(error.clone()).with_suggestion(
            "The document must be a YAML or JSON mapping (a serialized deployment descriptor)",
        ),
        AgpError::ConfigError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Review the recognized options and their types in the README"),
        _ => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_variable_lists_supported_addresses() {
        let err = AgpError::UnresolvedCustomVariable {
            address: "unknown".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("agp:unknown"));
        assert!(msg.contains("agp:sls-default-name"));
        assert!(msg.contains("agp:sls-regional-name"));
    }

    #[test]
    fn configuration_violation_names_escape_hatch() {
        let msg = AgpError::ConfigurationViolation.to_string();
        assert!(msg.contains("checkDeploymentBucketConfig = false"));
    }

    #[test]
    fn error_context_display_includes_tool_name() {
        let ctx = ErrorContext::new(AgpError::ConfigurationViolation);
        let rendered = format!("{ctx}");
        assert!(rendered.starts_with("AGP Conventions: "));
    }

    #[test]
    fn missing_file_error_names_the_document() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = anyhow::Error::from(io_err)
            .context("Failed to read deployment document serverless.yml");
        let ctx = user_friendly_error(err);
        assert!(ctx.error.to_string().contains("serverless.yml"));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn user_friendly_error_attaches_suggestion() {
        let err = anyhow::Error::from(AgpError::UnresolvedCustomVariable {
            address: "bogus".to_string(),
        });
        let ctx = user_friendly_error(err);
        assert!(ctx.suggestion.is_some());
    }
}
