// SPDX-License-Identifier: Apache-2.0

//! High-level pick pipeline shared by front ends.
//!
//! Combines filtering and sampling so the CLI only deals with presentation.

use tracing::{info, instrument};

use crate::filter::{RepoFilter, filter_repos};
use crate::repos::RepoRecord;
use crate::sample::sample;

/// Outcome of filtering and sampling a snapshot.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Number of records that satisfied the filter.
    pub matched: usize,
    /// Drawn records, in draw order.
    pub picks: Vec<&'a RepoRecord>,
}

impl Selection<'_> {
    /// Returns true if nothing matched the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Filter `repos` and draw up to `count` of the matches.
///
/// Sampling is skipped when nothing matches.
///
/// # Arguments
///
/// * `repos` - Snapshot records in file order
/// * `filter` - Selection criteria
/// * `count` - Maximum number of picks
/// * `rng` - Random source; seed it for reproducible picks
#[instrument(skip(repos, rng), fields(total = repos.len()))]
pub fn pick_repos<'a>(
    repos: &'a [RepoRecord],
    filter: &RepoFilter,
    count: usize,
    rng: &mut fastrand::Rng,
) -> Selection<'a> {
    let candidates = filter_repos(repos, filter);
    if candidates.is_empty() {
        info!("No repositories matched the filter");
        return Selection {
            matched: 0,
            picks: Vec::new(),
        };
    }

    let picks = sample(&candidates, count, rng);
    Selection {
        matched: candidates.len(),
        picks,
    }
}
