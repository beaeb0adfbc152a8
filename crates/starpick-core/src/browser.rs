// SPDX-License-Identifier: Apache-2.0

//! Opening repository URLs in a web browser.
//!
//! The [`UrlOpener`] trait lets callers swap the system launcher for a
//! recording implementation in tests.

use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use crate::error::StarpickError;

/// Something that can open a URL for the user.
pub trait UrlOpener {
    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns `StarpickError::Browser` if the URL could not be handed off.
    fn open(&self, url: &str) -> crate::Result<()>;
}

/// Launches the platform's default URL handler.
///
/// Uses `open` on macOS, `rundll32 url.dll,FileProtocolHandler` on Windows,
/// and `xdg-open` elsewhere, unless an explicit command is configured.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    command: Option<String>,
}

impl SystemBrowser {
    /// Creates a launcher, optionally overriding the program to run.
    #[must_use]
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Builds the process invocation for `url` without running it.
    fn build_command(&self, url: &str) -> Command {
        if let Some(program) = &self.command {
            let mut cmd = Command::new(program);
            cmd.arg(url);
            return cmd;
        }

        platform_command(std::env::consts::OS, url)
    }
}

/// The default URL handler invocation for the operating system `os`.
fn platform_command(os: &str, url: &str) -> Command {
    let mut cmd = match os {
        "macos" => Command::new("open"),
        "windows" => {
            // rundll32 receives the URL without going through cmd's parser.
            let mut cmd = Command::new("rundll32");
            cmd.arg("url.dll,FileProtocolHandler");
            cmd
        }
        _ => Command::new("xdg-open"),
    };
    cmd.arg(url);
    cmd
}

impl UrlOpener for SystemBrowser {
    #[instrument(skip(self))]
    fn open(&self, url: &str) -> crate::Result<()> {
        let mut cmd = self.build_command(url);
        let program = cmd.get_program().to_string_lossy().into_owned();
        debug!("Launching {program}");

        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|e| StarpickError::Browser {
                url: url.to_string(),
                message: format!("failed to run {program}: {e}"),
            })
    }
}
