// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for starpick.
//!
//! Uses clap's derive API. Running `starpick` with no subcommand picks
//! repositories; `starpick completion <shell>` prints a completion script.

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use starpick_core::Difficulty;

/// Extended help text for the completion subcommand with shell-specific examples.
const COMPLETION_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(starpick completion bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      starpick completion zsh > ~/.zsh/completions/_starpick

  fish
    Generate completion file:
      starpick completion fish > ~/.config/fish/completions/starpick.fish
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output for notes
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone, Debug)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (summary lines)
    pub quiet: bool,
    /// Enable verbose output
    pub verbose: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }

    /// Returns true if the output is meant for a human reader.
    pub fn is_human(&self) -> bool {
        matches!(self.format, OutputFormat::Text | OutputFormat::Markdown)
    }
}

/// starpick - pick a random starred repository to learn from.
///
/// Reads the snapshot written by your starred-repos fetch tool, filters it,
/// and shows one or more random picks.
#[derive(Parser, Debug)]
#[command(name = "starpick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Filters and sampling options
    #[command(flatten)]
    pub pick: PickArgs,

    /// Output format (text, json, yaml, markdown)
    #[arg(long, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (summary lines)
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options controlling which repositories are picked.
#[derive(Args, Debug, Clone, Default)]
pub struct PickArgs {
    /// Filter by programming language (case-insensitive)
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    /// Filter by difficulty level
    #[arg(
        long,
        short = 'd',
        ignore_case = true,
        value_parser = PossibleValuesParser::new(Difficulty::ALL.map(Difficulty::as_str))
            .try_map(|s| s.parse::<Difficulty>())
    )]
    pub difficulty: Option<Difficulty>,

    /// Include archived repositories
    #[arg(long)]
    pub include_archived: bool,

    /// Open each picked repository in the browser
    #[arg(long, short = 'o')]
    pub open: bool,

    /// Number of repositories to pick [default: 1]
    #[arg(long, short = 'c', value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Snapshot file to read [default: starred_repos.json]
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a shell completion script (output to stdout)
    #[command(after_long_help = COMPLETION_HELP)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
