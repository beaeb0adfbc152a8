// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the starpick CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to stderr.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! starpick
//!
//! # Debug output for troubleshooting
//! RUST_LOG=starpick=debug,starpick_core=debug starpick
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default directives when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "starpick=debug,starpick_core=debug"
    } else {
        "starpick=warn,starpick_core=warn"
    }
}

/// Initialize the logging subsystem.
///
/// The `RUST_LOG` environment variable takes precedence; otherwise `verbose`
/// raises the default level from warn to debug.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
