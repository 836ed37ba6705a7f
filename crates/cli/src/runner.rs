// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel audit runner with error isolation.
//!
//! Runs audits in parallel using rayon. Audits are pure functions over
//! the shared immutable artifact bag, so no coordination is needed.
//! Errors and panics are isolated per audit: one failure becomes an
//! errored record instead of aborting the run.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::artifacts::Artifacts;
use crate::audit::{Audit, AuditRecord};
use crate::audits::AUDIT_IDS;

/// Run all provided audits over the artifact bag and return records in
/// canonical registry order.
pub fn run_audits(audits: Vec<Arc<dyn Audit>>, artifacts: &Artifacts) -> Vec<AuditRecord> {
    let mut records: Vec<AuditRecord> = audits
        .into_par_iter()
        .map(|audit| {
            let meta = audit.meta();
            tracing::debug!(id = meta.id, "running audit");

            let start = Instant::now();
            let outcome =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| audit.run(artifacts)));
            let duration_ms = start.elapsed().as_millis() as u64;

            let mut record = match outcome {
                Ok(Ok(result)) => AuditRecord::from_result(&meta, result),
                Ok(Err(e)) => AuditRecord::errored(&meta, e.to_string()),
                Err(_) => AuditRecord::errored(&meta, "internal error: audit panicked"),
            };
            record.duration_ms = Some(duration_ms);
            record
        })
        .collect();

    records.sort_by_key(|r| {
        AUDIT_IDS
            .iter()
            .position(|&id| id == r.id)
            .unwrap_or(usize::MAX)
    });

    records
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
