// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin manifest: the audit list and the report category.
//!
//! Plain immutable configuration data consumed once by the host at
//! load time. No behavior is attached beyond the category aggregate.

use serde::Serialize;

use crate::audit::{AuditMeta, AuditRecord};
use crate::audits;

/// Reference to an audit within a category, with its aggregate weight.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRef {
    pub id: &'static str,
    pub weight: f64,
}

/// A named, weighted grouping of audit scores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub title: &'static str,
    pub description: &'static str,
    pub audit_refs: Vec<AuditRef>,
}

/// The plugin manifest exposed to the host.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// Audit metadata in registry order.
    pub audits: Vec<AuditMeta>,
    pub category: Category,
}

/// The report category grouping both audits with equal weight.
pub fn category() -> Category {
    Category {
        title: "Feature Policy Best practices",
        description: "Best practices Scores",
        audit_refs: vec![
            AuditRef {
                id: "sync-xhr",
                weight: 1.0,
            },
            AuditRef {
                id: "unoptimized-images",
                weight: 1.0,
            },
        ],
    }
}

/// Build the full manifest from the registry.
pub fn manifest() -> Manifest {
    Manifest {
        audits: audits::all_audits().iter().map(|a| a.meta()).collect(),
        category: category(),
    }
}

/// Weighted average of the category's audit scores.
///
/// Audits that produced no score are excluded along with their weight.
/// Returns `None` when nothing contributed.
pub fn category_score(category: &Category, records: &[AuditRecord]) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for audit_ref in &category.audit_refs {
        let Some(record) = records.iter().find(|r| r.id == audit_ref.id) else {
            continue;
        };
        let Some(score) = record.score else {
            continue;
        };
        weighted_sum += score * audit_ref.weight;
        total_weight += audit_ref.weight;
    }

    if total_weight > 0.0 {
        Some(weighted_sum / total_weight)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
