// SPDX-License-Identifier: Apache-2.0

//! Pick random repositories from the starred snapshot.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use starpick_core::{AppConfig, RepoFilter, StarpickError, UrlOpener, load_snapshot, pick_repos};
use tracing::{debug, warn};

use super::types::{PickResult, PickedRepo};
use crate::cli::PickArgs;

/// Resolves the snapshot path: `--file` flag > `snapshot.path` config.
pub fn snapshot_path(args: &PickArgs, config: &AppConfig) -> PathBuf {
    args.file
        .clone()
        .unwrap_or_else(|| config.snapshot.path.clone())
}

/// Builds the filter from CLI flags, falling back to config defaults.
pub fn build_filter(args: &PickArgs, config: &AppConfig) -> RepoFilter {
    RepoFilter::builder()
        .maybe_language(args.language.clone())
        .maybe_difficulty(args.difficulty)
        .exclude_archived(!(args.include_archived || config.pick.include_archived))
        .build()
}

/// Resolves the pick count: `--count` flag > `pick.count` config.
fn pick_count(args: &PickArgs, config: &AppConfig) -> Result<usize, StarpickError> {
    let count = args.count.unwrap_or(config.pick.count);
    if count == 0 {
        return Err(StarpickError::Config {
            message: "pick.count must be at least 1".to_string(),
        });
    }
    Ok(count as usize)
}

/// Load the snapshot, filter it, and draw the requested number of picks.
pub fn run(args: &PickArgs, config: &AppConfig, now: &DateTime<Utc>) -> Result<PickResult> {
    let count = pick_count(args, config)?;
    let path = snapshot_path(args, config);
    let snapshot = load_snapshot(&path)?;

    if let Some(diagnostic) = snapshot.diagnostic {
        return Ok(PickResult::MissingSnapshot {
            path,
            message: diagnostic.to_string(),
        });
    }

    let filter = build_filter(args, config);
    debug!(?filter, count, "Picking repositories");

    let mut rng = args
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let selection = pick_repos(&snapshot.repos, &filter, count, &mut rng);

    if selection.is_empty() {
        return Ok(PickResult::NoMatch {
            total: snapshot.repos.len(),
        });
    }

    Ok(PickResult::Picked {
        matched: selection.matched,
        picks: selection
            .picks
            .into_iter()
            .map(|repo| PickedRepo::new(repo, now))
            .collect(),
    })
}

/// Open each pick's URL, continuing past failures.
///
/// Returns one message per pick that could not be opened.
pub fn open_picks(picks: &[PickedRepo], opener: &dyn UrlOpener) -> Vec<String> {
    let mut failures = Vec::new();

    for pick in picks {
        let Some(url) = pick.repo.url.as_deref().filter(|u| !u.is_empty()) else {
            warn!("{} has no URL to open", pick.repo.full_name);
            failures.push(format!("{} has no URL to open", pick.repo.full_name));
            continue;
        };

        if let Err(e) = opener.open(url) {
            warn!("{e}");
            failures.push(e.to_string());
        }
    }

    failures
}
