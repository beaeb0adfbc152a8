// SPDX-License-Identifier: Apache-2.0

//! Filtering of snapshot records by language, difficulty, and archive status.

use bon::Builder;
use tracing::{debug, instrument};

use crate::difficulty::Difficulty;
use crate::repos::RepoRecord;

/// Criteria for selecting repositories.
///
/// Every active criterion must hold for a record to match. An omitted
/// criterion places no constraint.
///
/// # Examples
///
/// ```
/// use starpick_core::{Difficulty, RepoFilter};
///
/// let filter = RepoFilter::builder()
///     .language("rust")
///     .difficulty(Difficulty::Beginner)
///     .build();
/// assert!(filter.exclude_archived);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct RepoFilter {
    /// Case-insensitive language name. Empty means no constraint.
    #[builder(into)]
    pub language: Option<String>,
    /// Required difficulty tier.
    pub difficulty: Option<Difficulty>,
    /// Drop archived repositories.
    #[builder(default = true)]
    pub exclude_archived: bool,
}

impl Default for RepoFilter {
    fn default() -> Self {
        Self {
            language: None,
            difficulty: None,
            exclude_archived: true,
        }
    }
}

impl RepoFilter {
    /// Returns true if the record satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, repo: &RepoRecord) -> bool {
        if self.exclude_archived && repo.archived {
            return false;
        }

        if let Some(language) = self.language.as_deref().filter(|l| !l.is_empty())
            && !repo.language_matches(language)
        {
            return false;
        }

        if let Some(difficulty) = self.difficulty
            && repo.difficulty() != difficulty
        {
            return false;
        }

        true
    }
}

/// Select the records matching `filter`, preserving their relative order.
#[instrument(skip(repos), fields(total = repos.len()))]
pub fn filter_repos<'a>(repos: &'a [RepoRecord], filter: &RepoFilter) -> Vec<&'a RepoRecord> {
    let matched: Vec<&RepoRecord> = repos.iter().filter(|repo| filter.matches(repo)).collect();
    debug!("{} of {} repositories matched", matched.len(), repos.len());
    matched
}
