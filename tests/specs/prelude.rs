//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;

/// Returns a Command configured to run the picket binary
pub fn picket_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("picket"))
}

/// Absolute path to an artifact fixture under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// Read a fixture to a string.
pub fn fixture_contents(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}
