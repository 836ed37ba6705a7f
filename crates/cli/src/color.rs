// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection logic:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default:
//!    - If not stdout.is_tty() → no color
//!    - If CLAUDE_CODE, CODEX, CI, or CURSOR env var set → no color
//!    - Else → use color

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::env::names;

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color. The `COLOR` env var follows a
/// similar convention for forcing color output.
pub fn resolve_color() -> ColorChoice {
    // NO_COLOR spec: any value (including empty) disables color
    if std::env::var_os(names::NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    // COLOR=1 forces color (non-standard but common)
    if std::env::var_os(names::COLOR).is_some() {
        return ColorChoice::Always;
    }
    // Auto-detect
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent environment.
fn is_agent_environment() -> bool {
    std::env::var_os(names::CLAUDE_CODE).is_some()
        || std::env::var_os(names::CODEX).is_some()
        || std::env::var_os(names::CURSOR).is_some()
        || std::env::var_os(names::CI).is_some()
}

/// Color scheme for audit output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold audit id (e.g., "sync-xhr").
    pub fn audit_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Green "PASS" indicator.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "FAIL" indicator.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Yellow "ERROR" indicator for audits that could not run.
    pub fn errored() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Cyan URL or snippet reference.
    pub fn url() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Bold category title.
    pub fn category() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
