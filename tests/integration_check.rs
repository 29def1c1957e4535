//! Integration tests for the `check` command.

use predicates::prelude::*;
use serde_json::json;

mod common;
use agp_conventions::test_utils::{conforming_document, deviating_document};
use common::{TestProject, agp};

/// A conforming deployment bucket passes the check.
#[test]
fn check_passes_on_conforming_bucket() {
    let project = TestProject::new();
    let doc = project.write_json("serverless.json", &conforming_document());

    agp()
        .arg("check")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conventions check passed"));
}

/// A deviating bucket fails the check when enforcement is on (the default).
#[test]
fn check_fails_on_deviating_bucket() {
    let project = TestProject::new();
    let doc = project.write_json("serverless.json", &deviating_document());

    agp()
        .arg("check")
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider.deploymentBucket"))
        .stderr(predicate::str::contains("checkDeploymentBucketConfig"));
}

/// With enforcement disabled, a deviating bucket is reported but not fatal.
#[test]
fn check_reports_only_when_enforcement_disabled() {
    let project = TestProject::new();
    let mut document = deviating_document();
    document["custom"] = json!({
        "awsGoodPractices": { "checkDeploymentBucketConfig": false }
    });
    let doc = project.write_json("serverless.json", &document);

    agp().arg("check").arg(&doc).assert().success();
}

/// An absent bucket section counts as a mismatch.
#[test]
fn check_fails_when_bucket_absent() {
    let project = TestProject::new();
    let mut document = conforming_document();
    document["provider"]
        .as_object_mut()
        .unwrap()
        .remove("deploymentBucket");
    let doc = project.write_json("serverless.json", &document);

    agp().arg("check").arg(&doc).assert().failure();
}

/// A missing document is a readable error naming the file, not a panic.
#[test]
fn check_fails_on_missing_document() {
    let project = TestProject::new();
    let missing = project.path().join("nope.yml");

    agp()
        .arg("check")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("nope.yml"));
}

/// YAML documents are accepted as well as JSON.
#[test]
fn check_accepts_yaml_documents() {
    let project = TestProject::new();
    let doc = project.write_yaml("serverless.yml", &conforming_document());

    agp().arg("check").arg(&doc).assert().success();
}
