// SPDX-License-Identifier: Apache-2.0

//! starpick - pick a random starred repository to learn from.
//!
//! A CLI tool that reads a local snapshot of your starred GitHub repositories,
//! filters it by language, difficulty, and archive status, and shows random picks.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use starpick_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);
    commands::run(cli.command, &cli.pick, &output_ctx, &config)
}
