//! Behavioral specs for CLI entry points and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Bare invocation shows help.
#[test]
fn bare_invocation_shows_help() {
    picket_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

/// Exit code 0 when invoked with --help.
#[test]
fn help_exits_successfully() {
    picket_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("picket"));
}

/// Exit code 0 when invoked with --version.
#[test]
fn version_exits_successfully() {
    picket_cmd().arg("--version").assert().success();
}

/// Unknown subcommands are rejected by clap.
#[test]
fn unknown_subcommand_fails() {
    picket_cmd().arg("frobnicate").assert().failure();
}

/// Subcommands list audit and manifest.
#[test]
fn help_lists_subcommands() {
    picket_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("audit"))
        .stdout(predicates::str::contains("manifest"));
}

/// Audit toggles appear in help.
#[test]
fn audit_help_lists_toggles() {
    picket_cmd()
        .args(["audit", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("--sync-xhr"))
        .stdout(predicates::str::contains("--no-sync-xhr"))
        .stdout(predicates::str::contains("--unoptimized-images"))
        .stdout(predicates::str::contains("--no-unoptimized-images"));
}
