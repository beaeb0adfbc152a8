// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module provides a formatting layer that downcasts `anyhow::Error` to
//! `StarpickError` and adds hints for different error types.
//! This separates structured error data (library) from user-friendly presentation (CLI).

use anyhow::Error;
use starpick_core::error::StarpickError;

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to `StarpickError` and adds variant-specific hints.
/// If the error is not a `StarpickError`, returns the full error chain.
///
/// # Arguments
///
/// * `error` - The error to format
///
/// # Returns
///
/// A formatted error message with hints
pub fn format_error(error: &Error) -> String {
    let Some(starpick_err) = error.downcast_ref::<StarpickError>() else {
        // Not a StarpickError, return the original error chain
        return format!("{error:#}");
    };

    match starpick_err {
        StarpickError::Config { .. } => format!(
            "{starpick_err}\n\nTip: Check your config file at {}",
            starpick_core::config_file_path().display()
        ),
        StarpickError::Io { .. } => {
            format!("{starpick_err}\n\nTip: Check that the snapshot path is a readable file.")
        }
        StarpickError::Snapshot { .. } => format!(
            "{starpick_err}\n\nTip: The snapshot may be truncated or from an incompatible tool. Re-run your starred-repos fetch tool to regenerate it."
        ),
        StarpickError::InvalidDifficulty { .. } => starpick_err.to_string(),
        StarpickError::Browser { .. } => format!(
            "{starpick_err}\n\nTip: Set `command` under [browser] in your config to choose a browser."
        ),
    }
}
