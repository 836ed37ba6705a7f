// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Format:
//! ```text
//! <audit-id>: PASS|FAIL (score <score>)
//!   <display value>
//!   <details fragment>
//! <category title>: <category score>
//! <summary line>
//! ```
//!
//! Unlike pass/fail-only linters, the details fragment is printed even
//! for passing audits: the recommended headers are advisory content.

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::audit::{AuditOutput, AuditRecord, Details};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor = StandardStream> {
    stdout: W,
}

impl TextFormatter<StandardStream> {
    /// Create a new text formatter writing to stdout.
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a formatter over an arbitrary color writer.
    pub fn with_writer(writer: W) -> Self {
        Self { stdout: writer }
    }

    /// Consume the formatter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.stdout
    }

    /// Write the complete report.
    pub fn write_output(&mut self, output: &AuditOutput) -> std::io::Result<()> {
        for record in &output.audits {
            self.write_audit(record)?;
        }

        if let Some(category) = &output.category {
            self.stdout.set_color(&scheme::category())?;
            write!(self.stdout, "{}", category.title)?;
            self.stdout.reset()?;
            match category.score {
                Some(score) => writeln!(self.stdout, ": {score:.2}")?,
                None => writeln!(self.stdout, ": no score")?,
            }
        }

        self.write_summary(output)
    }

    /// Write a single audit record.
    pub fn write_audit(&mut self, record: &AuditRecord) -> std::io::Result<()> {
        // Audit id: bold
        self.stdout.set_color(&scheme::audit_name())?;
        write!(self.stdout, "{}", record.id)?;
        self.stdout.reset()?;
        write!(self.stdout, ": ")?;

        if let Some(error) = &record.error {
            self.stdout.set_color(&scheme::errored())?;
            write!(self.stdout, "ERROR")?;
            self.stdout.reset()?;
            writeln!(self.stdout)?;
            writeln!(self.stdout, "  {error}")?;
            return Ok(());
        }

        if record.passed {
            self.stdout.set_color(&scheme::pass())?;
            write!(self.stdout, "PASS")?;
        } else {
            self.stdout.set_color(&scheme::fail())?;
            write!(self.stdout, "FAIL")?;
        }
        self.stdout.reset()?;

        match record.score {
            Some(score) => writeln!(self.stdout, " (score {score:.2})")?,
            None => writeln!(self.stdout)?,
        }

        if let Some(display_value) = &record.display_value {
            writeln!(self.stdout, "  {display_value}")?;
        }

        if let Some(details) = &record.details {
            self.write_details(details)?;
        }

        Ok(())
    }

    fn write_details(&mut self, details: &Details) -> std::io::Result<()> {
        match details {
            Details::List { items } => {
                for item in items {
                    writeln!(self.stdout, "  {}:", item.title)?;
                    for line in &item.lines {
                        write!(self.stdout, "    ")?;
                        self.stdout.set_color(&scheme::url())?;
                        write!(self.stdout, "{}", line.content)?;
                        self.stdout.reset()?;
                        writeln!(self.stdout)?;
                    }
                    for message in &item.general_messages {
                        writeln!(self.stdout, "    {}", message.message)?;
                    }
                }
            }
            Details::Table { headings, items } => {
                for row in items {
                    let mut columns = headings.iter();
                    // Lead column (the URL) at shallow indent, the
                    // recommended headers nested under it.
                    if let Some(lead) = columns.next() {
                        write!(self.stdout, "  ")?;
                        self.stdout.set_color(&scheme::url())?;
                        write!(self.stdout, "{}", cell(row, lead.key))?;
                        self.stdout.reset()?;
                        writeln!(self.stdout)?;
                    }
                    for heading in columns {
                        writeln!(self.stdout, "    {}", cell(row, heading.key))?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, output: &AuditOutput) -> std::io::Result<()> {
        let passed = output.audits.iter().filter(|a| a.passed).count();
        let failed = output.audits.len() - passed;

        if failed == 0 {
            writeln!(
                self.stdout,
                "{} audit{} passed",
                passed,
                if passed == 1 { "" } else { "s" }
            )?;
        } else {
            writeln!(
                self.stdout,
                "{} audit{} passed, {} failed",
                passed,
                if passed == 1 { "" } else { "s" },
                failed
            )?;
        }
        Ok(())
    }
}

/// Look up a row cell by heading key, rendering non-strings verbatim.
fn cell(row: &serde_json::Value, key: &str) -> String {
    match row.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
