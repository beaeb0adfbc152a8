// SPDX-License-Identifier: Apache-2.0

//! Snapshot loading.
//!
//! The snapshot is a JSON array of [`RepoRecord`] written by an external fetch
//! tool. A missing file is not an error: the loader returns an empty snapshot
//! carrying a [`SnapshotDiagnostic`] so callers can report it and stop.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::StarpickError;
use crate::repos::RepoRecord;

/// Why a snapshot came back empty without an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotDiagnostic {
    /// The snapshot file does not exist.
    Missing {
        /// Path that was looked up.
        path: PathBuf,
    },
}

impl fmt::Display for SnapshotDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotDiagnostic::Missing { path } => write!(
                f,
                "{} not found. Run your starred-repos fetch tool first.",
                path.display()
            ),
        }
    }
}

/// Repository records loaded from a snapshot file.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Source the records were read from.
    pub path: PathBuf,
    /// Records in file order.
    pub repos: Vec<RepoRecord>,
    /// Set when the load degraded to an empty result.
    pub diagnostic: Option<SnapshotDiagnostic>,
}

impl Snapshot {
    /// Returns true if no records were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

/// Parse snapshot content into records.
///
/// # Errors
///
/// Returns the parse error if the content is not an array of valid records.
pub fn parse_snapshot(content: &str) -> serde_json::Result<Vec<RepoRecord>> {
    serde_json::from_str(content)
}

/// Load a snapshot from `path`.
///
/// A file that does not exist yields an empty [`Snapshot`] with a
/// [`SnapshotDiagnostic::Missing`] diagnostic.
///
/// # Errors
///
/// Returns `StarpickError::Io` if the file exists but cannot be read, and
/// `StarpickError::Snapshot` if its content is malformed.
#[instrument]
pub fn load_snapshot(path: &Path) -> crate::Result<Snapshot> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Snapshot not found: {}", path.display());
            return Ok(Snapshot {
                path: path.to_path_buf(),
                repos: Vec::new(),
                diagnostic: Some(SnapshotDiagnostic::Missing {
                    path: path.to_path_buf(),
                }),
            });
        }
        Err(source) => {
            return Err(StarpickError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let repos = parse_snapshot(&content).map_err(|source| StarpickError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} repositories from snapshot", repos.len());
    Ok(Snapshot {
        path: path.to_path_buf(),
        repos,
        diagnostic: None,
    })
}
