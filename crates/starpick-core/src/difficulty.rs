// SPDX-License-Identifier: Apache-2.0

//! Difficulty tiers derived from repository popularity and size.
//!
//! Star thresholds are checked first. Size only separates beginner from
//! advanced among repositories with at most [`INTERMEDIATE_STARS`] stars.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StarpickError;
use crate::repos::RepoRecord;

/// More stars than this makes a repository a beginner pick.
pub const BEGINNER_STARS: u64 = 10_000;

/// More stars than this (but not above [`BEGINNER_STARS`]) makes it intermediate.
pub const INTERMEDIATE_STARS: u64 = 1_000;

/// Low-star repositories smaller than this many kilobytes are beginner picks.
pub const SMALL_REPO_KB: u64 = 1_000;

/// Coarse learning difficulty of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Popular or small projects.
    Beginner,
    /// Moderately popular projects.
    Intermediate,
    /// Large projects with few stars.
    Advanced,
}

impl Difficulty {
    /// All tiers, in ascending order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Title-cased name for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = StarpickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StarpickError::InvalidDifficulty {
                value: s.to_string(),
            })
    }
}

/// Classify a repository into a difficulty tier.
///
/// Star thresholds take precedence over size: a low-star, small repository
/// is `Beginner`, never `Advanced`.
#[must_use]
pub fn classify(repo: &RepoRecord) -> Difficulty {
    if repo.stars > BEGINNER_STARS {
        Difficulty::Beginner
    } else if repo.stars > INTERMEDIATE_STARS {
        Difficulty::Intermediate
    } else if repo.size < SMALL_REPO_KB {
        Difficulty::Beginner
    } else {
        Difficulty::Advanced
    }
}
