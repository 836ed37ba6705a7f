// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest command implementation.

use picket::cli::{Cli, ManifestArgs};
use picket::manifest;

/// Print the plugin manifest as JSON.
pub fn run(_cli: &Cli, args: &ManifestArgs) -> anyhow::Result<()> {
    let manifest = manifest::manifest();

    let json = if args.compact {
        serde_json::to_string(&manifest)?
    } else {
        serde_json::to_string_pretty(&manifest)?
    };
    println!("{json}");

    Ok(())
}
