//! External link dispatch
//!
//! The carousel never builds URLs: it picks one of four fixed targets and
//! hands the configured URI to a [`LinkOpener`] supplied by the host.

use crate::content::Config;
use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::info;

/// Actions that leave the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    Donation,
    Homepage,
    TaxBenefit,
    /// Dial the center's phone number
    Call,
}

impl LinkTarget {
    /// Resolve the URI for this target from the campaign configuration
    pub fn uri(self, config: &Config) -> String {
        match self {
            LinkTarget::Donation => config.links.donation.to_string(),
            LinkTarget::Homepage => config.links.homepage.to_string(),
            LinkTarget::TaxBenefit => config.links.tax_benefit.to_string(),
            LinkTarget::Call => format!("tel:{}", config.center_info.phone),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkTarget::Donation => "donation",
            LinkTarget::Homepage => "homepage",
            LinkTarget::TaxBenefit => "tax benefit",
            LinkTarget::Call => "call",
        }
    }
}

/// Errors raised by the host when a link cannot be opened
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("failed to launch handler for {uri}: {source}")]
    Spawn {
        uri: String,
        #[source]
        source: io::Error,
    },

    #[error("no URL handler available on this platform for {uri}")]
    Unsupported { uri: String },
}

/// Host capability for opening a URI in a new context
pub trait LinkOpener {
    fn open(&mut self, uri: &str) -> Result<(), LinkError>;
}

/// Opens URIs with the operating system's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(uri: &str) -> Option<Command> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(uri);
            Some(cmd)
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", uri]);
            Some(cmd)
        } else if cfg!(unix) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(uri);
            Some(cmd)
        } else {
            None
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&mut self, uri: &str) -> Result<(), LinkError> {
        let mut cmd = Self::command(uri).ok_or_else(|| LinkError::Unsupported {
            uri: uri.to_string(),
        })?;

        // Detach from the TUI: the handler must not write into the alternate screen
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LinkError::Spawn {
                uri: uri.to_string(),
                source,
            })?;

        info!(%uri, "opened link");
        Ok(())
    }
}

/// Logs URIs instead of opening them
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunOpener;

impl LinkOpener for DryRunOpener {
    fn open(&mut self, uri: &str) -> Result<(), LinkError> {
        info!(%uri, "dry run: link not opened");
        Ok(())
    }
}
