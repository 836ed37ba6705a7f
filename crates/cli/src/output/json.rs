// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). Records
//! carry the host renderer's camelCase field names.

use std::io::Write;

use chrono::Utc;

use crate::audit::{AuditOutput, AuditRecord, CategoryScore};

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &AuditOutput) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Create AuditOutput with current timestamp.
pub fn create_output(
    passed: bool,
    category: Option<CategoryScore>,
    audits: Vec<AuditRecord>,
) -> AuditOutput {
    AuditOutput::new(
        Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        passed,
        category,
        audits,
    )
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
