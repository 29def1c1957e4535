//! Test utilities for AGP Conventions
//!
//! Helpers shared by unit and integration tests: one-time tracing
//! initialization and fixture deployment documents. Available to integration
//! tests through the `test-utils` feature.

use serde_json::{Value, json};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests.
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Initializes the tracing subscriber once regardless of how many times it
/// is called. Respects `RUST_LOG` when set, or uses the provided level.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// A deployment document with one Lambda function and a conforming
/// deployment bucket, ready for the full pipeline.
#[must_use]
pub fn conforming_document() -> Value {
    json!({
        "app": "svc",
        "service": "svc",
        "provider": {
            "stage": "dev",
            "region": "us-east-1",
            "deploymentBucket": {
                "name": "serverless-deployment-bucket-account-${aws:accountId}-${aws:region}",
                "serverSideEncryption": "AES256",
                "blockPublicAccess": true
            }
        },
        "Resources": {
            "HandlerFunction": {
                "Type": "AWS::Lambda::Function",
                "Properties": {}
            }
        }
    })
}

/// A deployment document whose bucket configuration deviates from the
/// recommendation.
#[must_use]
pub fn deviating_document() -> Value {
    let mut doc = conforming_document();
    doc["provider"]["deploymentBucket"] = json!({ "name": "my-own-bucket" });
    doc
}
