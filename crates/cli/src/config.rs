//! Configuration parsing and validation.
//!
//! Handles picket.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Loose parse that validates the version and captures unknown keys.
///
/// The `audit` table is named here only so it does not show up as
/// unknown; the typed parse below consumes it.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default, rename = "audit")]
    _audit: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Per-audit configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Per-audit configurations, keyed by audit id.
#[derive(Debug, Default, Deserialize)]
pub struct AuditConfig {
    #[serde(default, rename = "sync-xhr")]
    pub sync_xhr: AuditLevelConfig,

    #[serde(default, rename = "unoptimized-images")]
    pub unoptimized_images: AuditLevelConfig,
}

/// A single audit's configuration.
#[derive(Debug, Default, Deserialize)]
pub struct AuditLevelConfig {
    /// Check level: error, warn, or off.
    #[serde(default)]
    pub check: CheckLevel,
}

/// Check level: error, warn, or off.
///
/// `warn` runs the audit but a failure does not affect the exit code;
/// `off` removes it from the run entirely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    #[default]
    Error,
    Warn,
    Off,
}

impl Config {
    /// Look up the configured level for an audit id.
    ///
    /// Unknown ids default to `error` so the registry stays the single
    /// source of truth for what exists.
    pub fn level(&self, id: &str) -> CheckLevel {
        match id {
            "sync-xhr" => self.audit.sync_xhr.check,
            "unoptimized-images" => self.audit.unoptimized_images.check,
            _ => CheckLevel::Error,
        }
    }
}

/// Load configuration from a picket.toml file, warning on unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let flexible: FlexibleConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("invalid TOML: {e}"),
        path: Some(path.to_path_buf()),
    })?;

    match flexible.version {
        None => {
            return Err(Error::Config {
                message: "missing required key: version".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        Some(1) => {}
        Some(v) => {
            return Err(Error::Config {
                message: format!("unsupported config version: {v} (expected 1)"),
                path: Some(path.to_path_buf()),
            });
        }
    }

    for key in flexible.unknown.keys() {
        tracing::warn!("unknown config key: {key}");
    }

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("invalid config: {e}"),
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
