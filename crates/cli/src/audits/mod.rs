//! Audit registry and discovery.
//!
//! Both registered audits are declared here:
//! - sync-xhr: synchronous XMLHttpRequest console warnings (binary)
//! - unoptimized-images: byte-per-pixel ratios for re-encoding candidates (numeric)

pub mod sync_xhr;
pub mod unoptimized_images;

use std::sync::Arc;

use crate::audit::Audit;

/// All registered audit ids in canonical order.
pub const AUDIT_IDS: &[&str] = &["sync-xhr", "unoptimized-images"];

/// Create all registered audits.
pub fn all_audits() -> Vec<Arc<dyn Audit>> {
    vec![
        Arc::new(sync_xhr::SyncXhrAudit),
        Arc::new(unoptimized_images::UnoptimizedImagesAudit),
    ]
}

/// Get an audit by id.
pub fn get_audit(id: &str) -> Option<Arc<dyn Audit>> {
    all_audits().into_iter().find(|a| a.meta().id == id)
}

/// Filter audits based on enabled/disabled flags.
///
/// Semantics:
/// - No flags: run ALL audits
/// - `--<audit>`: run ONLY specified audits
/// - `--no-<audit>`: run all EXCEPT specified audits
pub fn filter_audits(enabled: &[String], disabled: &[String]) -> Vec<Arc<dyn Audit>> {
    let all = all_audits();

    if !enabled.is_empty() {
        all.into_iter()
            .filter(|a| enabled.iter().any(|e| e == a.meta().id))
            .collect()
    } else {
        all.into_iter()
            .filter(|a| !disabled.iter().any(|d| d == a.meta().id))
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
