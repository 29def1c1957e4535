//! Core types for AGP Conventions
//!
//! The foundation of the crate's type system: strongly-typed errors
//! ([`AgpError`]) for precise handling in code, and user-friendly error
//! contexts ([`ErrorContext`]) with actionable suggestions for CLI users.
//!
//! # Design Principles
//!
//! - **Error-first design**: every fallible operation returns a [`Result`]
//!   with meaningful error information.
//! - **Fail fast, fail once**: the two fatal error kinds abort the current
//!   lifecycle step immediately; nothing is retried, and recovery belongs to
//!   the caller.
//! - **User experience**: operator-facing errors carry the tool-name prefix,
//!   contextual suggestions, and terminal colors.

pub mod error;

pub use error::{AgpError, ErrorContext, user_friendly_error};
