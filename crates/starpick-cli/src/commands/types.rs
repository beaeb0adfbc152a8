// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! These types allow command handlers to return data instead of printing
//! directly, improving testability and separation of concerns.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use starpick_core::{Difficulty, RepoRecord, days_since};

/// A picked repository with the values derived for display.
#[derive(Debug, Clone, Serialize)]
pub struct PickedRepo {
    /// The record as loaded from the snapshot.
    #[serde(flatten)]
    pub repo: RepoRecord,
    /// Derived difficulty tier.
    pub difficulty: Difficulty,
    /// Whole days since the last update.
    pub days_ago: i64,
}

impl PickedRepo {
    /// Derives display values for `repo` relative to `now`.
    pub fn new(repo: &RepoRecord, now: &DateTime<Utc>) -> Self {
        Self {
            difficulty: repo.difficulty(),
            days_ago: days_since(&repo.updated_at, now),
            repo: repo.clone(),
        }
    }
}

/// Result from the pick command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PickResult {
    /// The snapshot file does not exist.
    MissingSnapshot {
        /// Path that was looked up.
        path: PathBuf,
        /// User-facing explanation.
        message: String,
    },
    /// No repository satisfied the filters.
    NoMatch {
        /// Number of repositories in the snapshot.
        total: usize,
    },
    /// One or more repositories were picked.
    Picked {
        /// Number of repositories that satisfied the filters.
        matched: usize,
        /// Picked repositories, in draw order.
        picks: Vec<PickedRepo>,
    },
}

impl PickResult {
    /// Returns the picked repositories, if any.
    pub fn picks(&self) -> &[PickedRepo] {
        match self {
            PickResult::Picked { picks, .. } => picks,
            _ => &[],
        }
    }
}
