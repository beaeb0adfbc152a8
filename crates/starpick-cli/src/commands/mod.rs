// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the starpick CLI.

pub mod completion;
pub mod pick;
pub mod types;

use anyhow::Result;
use chrono::Utc;
use console::style;
use starpick_core::{AppConfig, SystemBrowser};
use tracing::debug;

use crate::cli::{Commands, OutputContext, PickArgs};
use crate::output;

/// Dispatch to the appropriate command handler.
pub fn run(
    command: Option<Commands>,
    args: &PickArgs,
    ctx: &OutputContext,
    config: &AppConfig,
) -> Result<()> {
    match command {
        Some(Commands::Completion { shell }) => completion::run_generate(shell),
        None => run_pick(args, ctx, config),
    }
}

/// Pick, render, and optionally open the picks in a browser.
fn run_pick(args: &PickArgs, ctx: &OutputContext, config: &AppConfig) -> Result<()> {
    let result = pick::run(args, config, &Utc::now())?;
    output::render_pick(&result, ctx)?;

    if args.open && !result.picks().is_empty() {
        let browser = SystemBrowser::new(config.browser.command.clone());
        debug!("Opening {} picks in browser", result.picks().len());

        let failures = pick::open_picks(result.picks(), &browser);
        if !failures.is_empty() && ctx.is_human() {
            for failure in &failures {
                eprintln!("{}", style(failure).yellow());
            }
            eprintln!(
                "{}",
                style("Tip: set `command` under [browser] in your config to choose a browser.")
                    .dim()
            );
        }
    }

    Ok(())
}
