//! Behavioral specs for the manifest command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// The manifest lists both audits and the category refs.
#[test]
fn manifest_is_structured_json() {
    let output = picket_cmd().arg("manifest").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let audits = json["audits"].as_array().unwrap();
    assert_eq!(audits.len(), 2);
    assert_eq!(audits[0]["id"], "sync-xhr");
    assert_eq!(audits[0]["scoreDisplayMode"], "binary");
    assert_eq!(audits[1]["id"], "unoptimized-images");
    assert_eq!(audits[1]["scoreDisplayMode"], "numeric");

    assert_eq!(json["category"]["title"], "Feature Policy Best practices");
    let refs = json["category"]["auditRefs"].as_array().unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0]["id"], "sync-xhr");
    assert_eq!(refs[0]["weight"], 1.0);
    assert_eq!(refs[1]["id"], "unoptimized-images");
    assert_eq!(refs[1]["weight"], 1.0);
}

/// Each audit declares the artifacts it consumes.
#[test]
fn manifest_declares_required_artifacts() {
    let output = picket_cmd().arg("manifest").output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(
        json["audits"][0]["requiredArtifacts"],
        serde_json::json!(["ConsoleMessages"])
    );
    assert_eq!(
        json["audits"][1]["requiredArtifacts"],
        serde_json::json!(["OptimizedImages", "ImageElements"])
    );
}

/// --compact emits a single line.
#[test]
fn compact_manifest_is_one_line() {
    let output = picket_cmd().args(["manifest", "--compact"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);

    // Still valid JSON.
    let _: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
}
