// SPDX-License-Identifier: Apache-2.0

//! Presentation of pick results.
//!
//! JSON and YAML serialize the status-tagged [`PickResult`] as is. Text and
//! markdown are written by hand in `pick`.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::{OutputContext, OutputFormat};
use crate::commands::types::PickResult;

mod pick;

/// Print the result of the pick command to stdout in the selected format.
pub fn render_pick(result: &PickResult, ctx: &OutputContext) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_pick(&mut stdout, result, ctx)
}

fn write_pick(w: &mut dyn Write, result: &PickResult, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, result)
                .context("Failed to serialize picks to JSON")?;
            writeln!(w)?;
        }
        OutputFormat::Yaml => {
            let yaml =
                serde_saphyr::to_string(result).context("Failed to serialize picks to YAML")?;
            writeln!(w, "{}", yaml.trim_end())?;
        }
        OutputFormat::Markdown => {
            pick::write_markdown(w, result, ctx).context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            pick::write_text(w, result, ctx).context("Failed to render text")?;
        }
    }
    Ok(())
}
