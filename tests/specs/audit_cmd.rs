//! Behavioral specs for the audit command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// A clean artifact bag passes both audits.
#[test]
fn clean_bag_passes() {
    picket_cmd()
        .args(["audit"])
        .arg(fixture("clean.json"))
        .assert()
        .success()
        .stdout(predicates::str::contains("sync-xhr: PASS (score 1.00)"))
        .stdout(predicates::str::contains(
            "unoptimized-images: PASS (score 1.00)",
        ))
        .stdout(predicates::str::contains("2 audits passed"));
}

/// The advisory header recommendation is printed even when sync-xhr passes.
#[test]
fn advisory_is_shown_on_pass() {
    picket_cmd()
        .args(["audit"])
        .arg(fixture("clean.json"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Feature-Policy: sync-xhr 'none'"))
        .stdout(predicates::str::contains(
            "Found 0 Synchronous XMLHttpRequest requests.",
        ));
}

/// A recorded synchronous XHR warning fails the binary audit.
#[test]
fn sync_xhr_warning_fails() {
    picket_cmd()
        .args(["audit"])
        .arg(fixture("sync-xhr-warning.json"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("sync-xhr: FAIL (score 0.00)"))
        .stdout(predicates::str::contains(
            "Found 1 Synchronous XMLHttpRequest requests.",
        ));
}

/// A flagged image yields the halved numeric score and both headers.
#[test]
fn unoptimized_image_scores_half() {
    picket_cmd()
        .args(["audit"])
        .arg(fixture("unoptimized.json"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "unoptimized-images: FAIL (score 0.50)",
        ))
        .stdout(predicates::str::contains("http://example.com/hero.jpg"))
        .stdout(predicates::str::contains(
            "unoptimized-lossy-images *(10.24);",
        ))
        .stdout(predicates::str::contains(
            "unoptimized-lossless-images *(-81.92);",
        ));
}

/// JSON output carries scores, category aggregate, and wire field names.
#[test]
fn json_output_is_structured() {
    let output = picket_cmd()
        .args(["audit", "-o", "json"])
        .arg(fixture("unoptimized.json"))
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["passed"], false);
    assert_eq!(json["category"]["title"], "Feature Policy Best practices");
    assert_eq!(json["category"]["score"], 0.75);

    let audits = json["audits"].as_array().unwrap();
    assert_eq!(audits.len(), 2);
    assert_eq!(audits[0]["id"], "sync-xhr");
    assert_eq!(audits[0]["score"], 1.0);
    assert_eq!(audits[1]["id"], "unoptimized-images");
    assert_eq!(audits[1]["score"], 0.5);
    assert_eq!(audits[1]["details"]["type"], "table");
    assert_eq!(
        audits[1]["details"]["items"][0]["lossyPolicyHeader"],
        "unoptimized-lossy-images *(10.24);"
    );
}

/// "-" reads the artifact bag from stdin.
#[test]
fn dash_reads_stdin() {
    picket_cmd()
        .args(["audit", "-"])
        .write_stdin(fixture_contents("clean.json"))
        .assert()
        .success()
        .stdout(predicates::str::contains("2 audits passed"));
}

/// Enable toggles narrow the run to the named audits.
#[test]
fn enable_toggle_runs_only_that_audit() {
    picket_cmd()
        .args(["audit", "--sync-xhr"])
        .arg(fixture("unoptimized.json"))
        .assert()
        .success()
        .stdout(predicates::str::contains("sync-xhr: PASS"))
        .stdout(predicates::str::contains("unoptimized-images").not());
}

/// Disable toggles remove the named audits from the run.
#[test]
fn disable_toggle_skips_that_audit() {
    picket_cmd()
        .args(["audit", "--no-unoptimized-images"])
        .arg(fixture("unoptimized.json"))
        .assert()
        .success()
        .stdout(predicates::str::contains("unoptimized-images").not());
}

/// An artifact bag without the required artifacts reports errored audits.
#[test]
fn empty_bag_errors_both_audits() {
    picket_cmd()
        .args(["audit"])
        .arg(fixture("empty-bag.json"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("sync-xhr: ERROR"))
        .stdout(predicates::str::contains(
            "missing required artifact: ConsoleMessages",
        ))
        .stdout(predicates::str::contains("unoptimized-images: ERROR"));
}

/// A record missing a required field is rejected up front.
#[test]
fn missing_field_is_a_validation_error() {
    picket_cmd()
        .args(["audit"])
        .arg(fixture("missing-field.json"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("artifact error"))
        .stderr(predicates::str::contains("jpegSize"));
}

/// A nonexistent artifacts file is an I/O error.
#[test]
fn nonexistent_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    picket_cmd()
        .args(["audit"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .code(3)
        .stderr(predicates::str::contains("io error"));
}

/// --color and --no-color conflict.
#[test]
fn conflicting_color_flags_are_rejected() {
    picket_cmd()
        .args(["audit", "--color", "--no-color"])
        .arg(fixture("clean.json"))
        .assert()
        .code(2);
}

/// Config can switch an audit off entirely.
#[test]
fn config_off_removes_an_audit() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("picket.toml"),
        "version = 1\n\n[audit.unoptimized-images]\ncheck = \"off\"\n",
    )
    .unwrap();

    picket_cmd()
        .args(["audit"])
        .arg(fixture("unoptimized.json"))
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("unoptimized-images").not());
}

/// Config can demote a failing audit to a warning.
#[test]
fn config_warn_demotes_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("picket.toml"),
        "version = 1\n\n[audit.unoptimized-images]\ncheck = \"warn\"\n",
    )
    .unwrap();

    // The audit still reports FAIL, but the exit code is 0.
    picket_cmd()
        .args(["audit"])
        .arg(fixture("unoptimized.json"))
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "unoptimized-images: FAIL (score 0.50)",
        ));
}

/// An explicit config path that does not exist is a config error.
#[test]
fn missing_explicit_config_fails() {
    picket_cmd()
        .args(["audit", "-C", "/nonexistent/picket.toml"])
        .arg(fixture("clean.json"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config"));
}

/// Config files must carry a supported version.
#[test]
fn unsupported_config_version_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("picket.toml"), "version = 9\n").unwrap();

    picket_cmd()
        .args(["audit"])
        .arg(fixture("clean.json"))
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}
