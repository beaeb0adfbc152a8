// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Starpick Core
//!
//! Core library for the starpick CLI - pick a random starred repository to
//! learn from.
//!
//! This crate provides reusable components for:
//! - Loading the starred repositories snapshot
//! - Classifying repositories into difficulty tiers
//! - Filtering by language, difficulty, and archive status
//! - Uniform random sampling without replacement
//! - Opening repository URLs in a browser
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use starpick_core::{Difficulty, RepoFilter, load_snapshot, pick_repos};
//!
//! # fn example() -> starpick_core::Result<()> {
//! let snapshot = load_snapshot(Path::new("starred_repos.json"))?;
//! if let Some(diagnostic) = &snapshot.diagnostic {
//!     eprintln!("{diagnostic}");
//!     return Ok(());
//! }
//!
//! let filter = RepoFilter::builder()
//!     .language("rust")
//!     .difficulty(Difficulty::Beginner)
//!     .build();
//!
//! let selection = pick_repos(&snapshot.repos, &filter, 1, &mut fastrand::Rng::new());
//! for repo in selection.picks {
//!     println!("{} ({})", repo.full_name, repo.difficulty());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`browser`] - URL launching
//! - [`config`] - Configuration loading and paths
//! - [`difficulty`] - Difficulty classification
//! - [`error`] - Error types
//! - [`filter`] - Record filtering
//! - [`repos`] - Repository record schema
//! - [`sample`](mod@sample) - Random sampling
//! - [`snapshot`] - Snapshot loading
//! - [`utils`] - Formatting helpers

// ============================================================================
// Error Handling
// ============================================================================

pub use error::StarpickError;

/// Convenience Result type for starpick operations.
///
/// This is equivalent to `std::result::Result<T, StarpickError>`.
pub type Result<T> = std::result::Result<T, StarpickError>;

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{
    AppConfig, BrowserConfig, DEFAULT_SNAPSHOT_FILE, PickConfig, SnapshotConfig, UiConfig,
    config_dir, config_file_path, load_config,
};

// ============================================================================
// Records and Snapshot
// ============================================================================

pub use repos::RepoRecord;
pub use snapshot::{Snapshot, SnapshotDiagnostic, load_snapshot, parse_snapshot};

// ============================================================================
// Selection
// ============================================================================

pub use difficulty::{Difficulty, classify};
pub use facade::{Selection, pick_repos};
pub use filter::{RepoFilter, filter_repos};
pub use sample::sample;

// ============================================================================
// Browser
// ============================================================================

pub use browser::{SystemBrowser, UrlOpener};

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{days_since, format_count, format_days_ago};

// ============================================================================
// Modules
// ============================================================================

pub mod browser;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod facade;
pub mod filter;
pub mod repos;
pub mod sample;
pub mod snapshot;
pub mod utils;
