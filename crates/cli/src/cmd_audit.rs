// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit command implementation.

use std::path::Path;

use termcolor::ColorChoice;

use picket::artifacts::{self, Artifacts};
use picket::audit::{Audit, CategoryScore};
use picket::audits;
use picket::cli::{AuditArgs, AuditFilter, Cli, OutputFormat};
use picket::color::resolve_color;
use picket::config::{self, CheckLevel, Config};
use picket::discovery;
use picket::error::ExitCode;
use picket::manifest;
use picket::output::json::{self, JsonFormatter};
use picket::output::text::TextFormatter;
use picket::runner;

/// Run the audit command.
pub fn run(cli: &Cli, args: &AuditArgs) -> anyhow::Result<ExitCode> {
    // Validate flag combinations
    if args.color && args.no_color {
        eprintln!("--color and --no-color cannot be used together");
        return Ok(ExitCode::ConfigError);
    }

    let cwd = std::env::current_dir()?;

    // Resolve config from the working directory
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;

    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    // Load the artifact bag
    let artifacts = if args.artifacts == Path::new("-") {
        Artifacts::from_reader(std::io::stdin().lock())?
    } else {
        artifacts::load(&args.artifacts)?
    };

    // Audit set: CLI toggles first, then config-level `off` removal
    let audits: Vec<_> = audits::filter_audits(&args.enabled_audits(), &args.disabled_audits())
        .into_iter()
        .filter(|a| config.level(a.meta().id) != CheckLevel::Off)
        .collect();

    let records = runner::run_audits(audits, &artifacts);

    // Fold pass/fail, demoting warn-level audits
    let passed = records
        .iter()
        .all(|r| r.passed || config.level(&r.id) == CheckLevel::Warn);

    let category = manifest::category();
    let category_score = manifest::category_score(&category, &records);
    let output = json::create_output(
        passed,
        Some(CategoryScore {
            title: category.title.to_string(),
            score: category_score,
        }),
        records,
    );

    match args.output {
        OutputFormat::Text => {
            let color = if args.no_color {
                ColorChoice::Never
            } else if args.color {
                ColorChoice::Always
            } else {
                resolve_color()
            };
            let mut formatter = TextFormatter::new(color);
            formatter.write_output(&output)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut formatter = JsonFormatter::new(stdout.lock());
            formatter.write(&output)?;
        }
    }

    Ok(if passed {
        ExitCode::Success
    } else {
        ExitCode::AuditFailed
    })
}
