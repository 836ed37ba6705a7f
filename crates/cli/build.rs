// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure — there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: disables color output (any value).
pub const NO_COLOR: &str = "NO_COLOR";
/// Environment variable: forces color output (any value).
pub const COLOR: &str = "COLOR";
/// Environment variable: indicates Claude Code agent environment.
pub const CLAUDE_CODE: &str = "CLAUDE_CODE";
/// Environment variable: indicates Codex agent environment.
pub const CODEX: &str = "CODEX";
/// Environment variable: indicates Cursor agent environment.
pub const CURSOR: &str = "CURSOR";
/// Environment variable: indicates CI environment.
pub const CI: &str = "CI";
/// Environment variable: configures tracing log filter.
pub const PICKET_LOG: &str = "PICKET_LOG";
/// Environment variable: overrides config file location.
pub const PICKET_CONFIG: &str = "PICKET_CONFIG";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
