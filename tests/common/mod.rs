//! Shared helpers for integration tests.

use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary project directory holding a deployment document.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write a document as JSON and return its path.
    pub fn write_json(&self, name: &str, document: &Value) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(document).unwrap())
            .expect("write document");
        path
    }

    /// Write a document as YAML and return its path.
    pub fn write_yaml(&self, name: &str, document: &Value) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, serde_yaml::to_string(document).expect("render yaml"))
            .expect("write document");
        path
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// The `agp` binary under test.
pub fn agp() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("agp").expect("binary built")
}
