// SPDX-License-Identifier: Apache-2.0

//! Error types for starpick.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during starpick operations.
#[derive(Error, Debug)]
pub enum StarpickError {
    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The snapshot exists but could not be read.
    #[error("Failed to read snapshot {}: {source}", path.display())]
    Io {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a valid array of repository records.
    #[error("Malformed snapshot {}: {source}", path.display())]
    Snapshot {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying parse error, including line and column.
        #[source]
        source: serde_json::Error,
    },

    /// A difficulty name other than beginner, intermediate or advanced.
    #[error("Invalid difficulty '{value}', expected one of: beginner, intermediate, advanced")]
    InvalidDifficulty {
        /// The rejected input.
        value: String,
    },

    /// The browser launcher could not be started.
    #[error("Failed to open {url} in browser: {message}")]
    Browser {
        /// URL that was being opened.
        url: String,
        /// Error message.
        message: String,
    },
}

impl From<config::ConfigError> for StarpickError {
    fn from(err: config::ConfigError) -> Self {
        StarpickError::Config {
            message: err.to_string(),
        }
    }
}
