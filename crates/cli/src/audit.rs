// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit trait and result types for output formatting.
//!
//! Result records and report fragments serialize with the host
//! renderer's camelCase wire names.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::artifacts::Artifacts;
use crate::error::Result;

/// The Audit trait defines a single scored inspection of gathered page data.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Audit>`.
pub trait Audit: Send + Sync {
    /// Metadata exposed to the host: identity, titles, score display
    /// mode, and the artifacts this audit consumes.
    fn meta(&self) -> AuditMeta;

    /// Run the audit over the supplied artifact bag.
    ///
    /// Audits are pure: they never mutate artifacts and share no state
    /// across invocations.
    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult>;
}

/// How an audit's score should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDisplayMode {
    /// Score is exactly 0 or 1.
    Binary,
    /// Score is a ratio, usually in `[0, 1]`.
    Numeric,
}

/// Static audit metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    /// Unique identifier (e.g., "sync-xhr").
    pub id: &'static str,

    /// Title shown when the audit passes.
    pub title: &'static str,

    /// Title shown when the audit fails.
    pub failure_title: &'static str,

    /// Description text, with embedded documentation links.
    pub description: &'static str,

    pub score_display_mode: ScoreDisplayMode,

    /// Names of the artifacts this audit reads from the bag.
    pub required_artifacts: &'static [&'static str],
}

/// Result of running a single audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// `Some(0.0)` or `Some(1.0)` for binary audits; an unclamped ratio
    /// for numeric ones. `None` means the audit produced no score.
    pub score: Option<f64>,

    /// One-line human-readable summary.
    pub display_value: String,

    /// Report fragment for the host renderer.
    pub details: Details,
}

/// A report fragment: either annotated code-snippet items or a table.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Details {
    List {
        items: Vec<ListItem>,
    },
    Table {
        headings: Vec<TableHeading>,
        /// One record per row, keyed by heading `key`, in input order.
        items: Vec<JsonValue>,
    },
}

/// One annotated snippet in a list fragment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub title: String,
    pub lines: Vec<SnippetLine>,
    pub line_count: usize,
    pub line_messages: Vec<LineMessage>,
    pub general_messages: Vec<GeneralMessage>,
}

/// A single line of snippet content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetLine {
    pub content: String,
    pub line_number: u32,
}

/// A message anchored to a snippet line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMessage {
    pub line_number: u32,
    pub message: String,
}

/// A message about the whole snippet.
#[derive(Debug, Clone, Serialize)]
pub struct GeneralMessage {
    pub message: String,
}

/// A table column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHeading {
    /// Row record key this column reads.
    pub key: &'static str,
    /// Column heading text.
    pub text: &'static str,
    /// Renderer hint ("url", "text").
    pub item_type: &'static str,
}

/// One audit's outcome as reported to the user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    /// Audit identifier.
    pub id: String,

    /// `title` when the audit passed, `failure_title` otherwise.
    pub title: String,

    pub score_display_mode: ScoreDisplayMode,

    /// Whether the audit scored a perfect 1.
    pub passed: bool,

    /// Serialized even when absent: the host contract is "number or null".
    pub score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,

    /// Error message if the audit could not produce a result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl AuditRecord {
    /// Build a record from a completed audit run.
    pub fn from_result(meta: &AuditMeta, result: AuditResult) -> Self {
        let passed = result.score.is_some_and(|s| s >= 1.0);
        Self {
            id: meta.id.to_string(),
            title: if passed { meta.title } else { meta.failure_title }.to_string(),
            score_display_mode: meta.score_display_mode,
            passed,
            score: result.score,
            display_value: Some(result.display_value),
            details: Some(result.details),
            error: None,
            duration_ms: None,
        }
    }

    /// Build a record for an audit that failed to run.
    pub fn errored(meta: &AuditMeta, error: impl Into<String>) -> Self {
        Self {
            id: meta.id.to_string(),
            title: meta.failure_title.to_string(),
            score_display_mode: meta.score_display_mode,
            passed: false,
            score: None,
            display_value: None,
            details: None,
            error: Some(error.into()),
            duration_ms: None,
        }
    }
}

/// Category aggregate attached to the report.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub title: String,

    /// Weighted average of scored audits; `None` when nothing scored.
    pub score: Option<f64>,
}

/// Aggregated results from all audits.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether the run as a whole passed. Audits demoted to `warn`
    /// level by config do not count against this.
    pub passed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryScore>,

    /// Records in canonical registry order.
    pub audits: Vec<AuditRecord>,
}

impl AuditOutput {
    pub fn new(
        timestamp: String,
        passed: bool,
        category: Option<CategoryScore>,
        audits: Vec<AuditRecord>,
    ) -> Self {
        Self {
            timestamp,
            passed,
            category,
            audits,
        }
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
