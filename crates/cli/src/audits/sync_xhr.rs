// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous XHR audit.
//!
//! Scans recorded console messages for the browser's synchronous
//! XMLHttpRequest deprecation warning and recommends the
//! `Feature-Policy: sync-xhr 'none'` response header.

use crate::artifacts::Artifacts;
use crate::audit::{
    Audit, AuditMeta, AuditResult, Details, GeneralMessage, ListItem, ScoreDisplayMode,
    SnippetLine,
};
use crate::error::Result;

/// Prefix the browser emits when a page issues a synchronous XHR.
const SYNC_XHR_WARNING: &str = "Synchronous XMLHttpRequest";

/// Recommended response header.
const POLICY_HEADER: &str = "Feature-Policy: sync-xhr 'none'";

/// The sync-xhr audit flags pages that issued synchronous XHRs.
pub struct SyncXhrAudit;

impl Audit for SyncXhrAudit {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "sync-xhr",
            title: "Does not use synchronous XHR, turn on feature policy to prevent regressions.",
            failure_title: "Uses Synchronous XHR, consider turn on feature policy to detect at dev time.",
            description: "Synchronous XMLHttpRequest has detrimental effects to the end user's \
                experience. Feature policy can be used to detect its presence and prevent future \
                regressions. See [Introduction to Feature Policy](https://developers.google.com/web/updates/2018/06/feature-policy) \
                and [sync-xhr](https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Feature-Policy/sync-xhr) \
                for more information.",
            score_display_mode: ScoreDisplayMode::Binary,
            required_artifacts: &["ConsoleMessages"],
        }
    }

    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult> {
        let messages = artifacts.console_messages()?;

        let warnings = messages
            .iter()
            .filter(|msg| msg.entry.text.starts_with(SYNC_XHR_WARNING))
            .count();

        Ok(AuditResult {
            score: Some(if warnings > 0 { 0.0 } else { 1.0 }),
            display_value: format!("Found {warnings} Synchronous XMLHttpRequest requests."),
            // The remediation hint is static advisory content, emitted
            // regardless of score.
            details: Details::List {
                items: vec![ListItem {
                    title: "feature policy".to_string(),
                    lines: vec![SnippetLine {
                        content: POLICY_HEADER.to_string(),
                        line_number: 1,
                    }],
                    line_count: 1,
                    line_messages: Vec::new(),
                    general_messages: vec![GeneralMessage {
                        message: "Turn on feature policy by adding this line to your response header."
                            .to_string(),
                    }],
                }],
            },
        })
    }
}

#[cfg(test)]
#[path = "sync_xhr_tests.rs"]
mod tests;
