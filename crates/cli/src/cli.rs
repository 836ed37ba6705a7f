// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Audits gathered page data and recommends Feature-Policy headers
#[derive(Parser)]
#[command(name = "picket")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PICKET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run audits over a gathered artifact bag
    Audit(AuditArgs),
    /// Print the plugin manifest for host consumption
    Manifest(ManifestArgs),
}

#[derive(clap::Args)]
pub struct AuditArgs {
    /// Artifact bag JSON file ("-" reads stdin)
    #[arg(value_name = "ARTIFACTS")]
    pub artifacts: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    // Audit enable flags (run only these audits)
    /// Run only the sync-xhr audit
    #[arg(long)]
    pub sync_xhr: bool,

    /// Run only the unoptimized-images audit
    #[arg(long)]
    pub unoptimized_images: bool,

    // Audit disable flags (skip these audits)
    /// Skip the sync-xhr audit
    #[arg(long)]
    pub no_sync_xhr: bool,

    /// Skip the unoptimized-images audit
    #[arg(long)]
    pub no_unoptimized_images: bool,
}

#[derive(clap::Args)]
pub struct ManifestArgs {
    /// Emit compact (single-line) JSON
    #[arg(long)]
    pub compact: bool,
}

/// Output format for audit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Trait for filtering audits by id.
pub trait AuditFilter {
    /// Get list of explicitly enabled audits.
    fn enabled_audits(&self) -> Vec<String>;

    /// Get list of explicitly disabled audits.
    fn disabled_audits(&self) -> Vec<String>;

    /// Check if an audit should be included based on filters.
    ///
    /// If any audits are explicitly enabled, only those are included.
    /// Otherwise, all audits are included except those explicitly disabled.
    fn should_include(&self, id: &str) -> bool {
        let enabled = self.enabled_audits();
        let disabled = self.disabled_audits();

        if !enabled.is_empty() {
            enabled.iter().any(|e| e == id)
        } else {
            !disabled.iter().any(|d| d == id)
        }
    }
}

impl AuditFilter for AuditArgs {
    fn enabled_audits(&self) -> Vec<String> {
        let mut audits = Vec::new();
        if self.sync_xhr {
            audits.push("sync-xhr".to_string());
        }
        if self.unoptimized_images {
            audits.push("unoptimized-images".to_string());
        }
        audits
    }

    fn disabled_audits(&self) -> Vec<String> {
        let mut audits = Vec::new();
        if self.no_sync_xhr {
            audits.push("sync-xhr".to_string());
        }
        if self.no_unoptimized_images {
            audits.push("unoptimized-images".to_string());
        }
        audits
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
