// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Picket CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use picket::cli::{Cli, Command};
use picket::env::names;
use picket::error::ExitCode;

mod cmd_audit;
mod cmd_manifest;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::PICKET_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("picket: {}", e);
            match e.downcast_ref::<picket::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Audit(args)) => cmd_audit::run(&cli, args),
        Some(Command::Manifest(args)) => {
            cmd_manifest::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
    }
}
