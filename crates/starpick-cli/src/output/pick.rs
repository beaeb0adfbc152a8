// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use starpick_core::{format_count, format_days_ago};

use crate::cli::OutputContext;
use crate::commands::types::{PickResult, PickedRepo};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn write_card(w: &mut dyn Write, pick: &PickedRepo, ctx: &OutputContext) -> io::Result<()> {
    let repo = &pick.repo;

    writeln!(w)?;
    writeln!(w, "{}", style(rule()).dim())?;
    writeln!(
        w,
        "{} {}",
        style(&repo.name).cyan().bold(),
        style(format!("({})", repo.full_name)).dim()
    )?;
    writeln!(w, "{}", style(rule()).dim())?;

    let field = |label: &str| style(format!("{label}:")).dim();
    writeln!(
        w,
        "{} {}",
        field("Description"),
        repo.description.as_deref().unwrap_or("No description")
    )?;
    writeln!(
        w,
        "{} {}",
        field("Language"),
        style(repo.language.as_deref().unwrap_or("Unknown")).yellow()
    )?;
    writeln!(w, "{} {}", field("Stars"), format_count(repo.stars))?;
    writeln!(w, "{} {}", field("Forks"), format_count(repo.forks))?;
    writeln!(
        w,
        "{} {}",
        field("Difficulty"),
        style(pick.difficulty.label()).green()
    )?;
    writeln!(
        w,
        "{} {}",
        field("Last updated"),
        format_days_ago(pick.days_ago)
    )?;
    writeln!(
        w,
        "{} {}",
        field("License"),
        repo.license.as_deref().unwrap_or("No license")
    )?;
    if ctx.verbose {
        writeln!(w, "{} {} KB", field("Size"), format_count(repo.size))?;
        writeln!(w, "{} {}", field("Archived"), repo.archived)?;
    }
    if !repo.topics.is_empty() {
        writeln!(w, "{} {}", field("Topics"), repo.topics.join(", "))?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "{} {}",
        field("URL"),
        style(repo.url.as_deref().unwrap_or("Unknown")).cyan()
    )?;
    writeln!(
        w,
        "{} git clone {}",
        field("Clone"),
        repo.clone_url.as_deref().unwrap_or("Unknown")
    )?;
    writeln!(w, "{}", style(rule()).dim())?;
    Ok(())
}

/// Writes the human-readable report: summary line, one card per pick, and a sign-off.
pub(super) fn write_text(
    w: &mut dyn Write,
    result: &PickResult,
    ctx: &OutputContext,
) -> io::Result<()> {
    match result {
        PickResult::MissingSnapshot { message, .. } => {
            writeln!(w, "{}", style(message).yellow())?;
        }
        PickResult::NoMatch { .. } => {
            writeln!(
                w,
                "{}",
                style("No repositories found matching your criteria.").yellow()
            )?;
        }
        PickResult::Picked { matched, picks } => {
            if !ctx.quiet {
                writeln!(w, "Found {matched} repositories matching your criteria.")?;
            }

            for (i, pick) in picks.iter().enumerate() {
                if picks.len() > 1 {
                    writeln!(w)?;
                    writeln!(w, "{}", style(format!("--- Pick #{} ---", i + 1)).bold())?;
                }
                write_card(w, pick, ctx)?;
            }

            if !ctx.quiet {
                writeln!(w)?;
                match picks.as_slice() {
                    [only] => writeln!(
                        w,
                        "{}",
                        style(format!("Happy learning with {}!", only.repo.name)).green()
                    )?,
                    _ => writeln!(
                        w,
                        "{}",
                        style(format!(
                            "Picked {} repositories for you to explore!",
                            picks.len()
                        ))
                        .green()
                    )?,
                }
            }
        }
    }
    Ok(())
}

/// Writes one markdown section per pick. Other outcomes fall back to text.
pub(super) fn write_markdown(
    w: &mut dyn Write,
    result: &PickResult,
    ctx: &OutputContext,
) -> io::Result<()> {
    let PickResult::Picked { matched, picks } = result else {
        return write_text(w, result, ctx);
    };

    writeln!(w, "# Repository picks\n")?;
    if !ctx.quiet {
        writeln!(w, "_{matched} repositories matched._\n")?;
    }

    for pick in picks {
        let repo = &pick.repo;
        match &repo.url {
            Some(url) => writeln!(w, "## [{}]({url})\n", repo.full_name)?,
            None => writeln!(w, "## {}\n", repo.full_name)?,
        }
        if let Some(description) = &repo.description {
            writeln!(w, "{description}\n")?;
        }
        writeln!(
            w,
            "- **Language:** {}",
            repo.language.as_deref().unwrap_or("Unknown")
        )?;
        writeln!(
            w,
            "- **Stars:** {} | **Forks:** {}",
            format_count(repo.stars),
            format_count(repo.forks)
        )?;
        writeln!(w, "- **Difficulty:** {}", pick.difficulty.label())?;
        writeln!(w, "- **Last updated:** {}", format_days_ago(pick.days_ago))?;
        writeln!(
            w,
            "- **License:** {}",
            repo.license.as_deref().unwrap_or("No license")
        )?;
        if !repo.topics.is_empty() {
            let topics: Vec<String> = repo.topics.iter().map(|t| format!("`{t}`")).collect();
            writeln!(w, "- **Topics:** {}", topics.join(" "))?;
        }
        if let Some(clone_url) = &repo.clone_url {
            writeln!(w, "\n```sh\ngit clone {clone_url}\n```")?;
        }
        writeln!(w)?;
    }
    Ok(())
}
