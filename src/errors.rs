//! Top-level error type for the terminal application
//!
//! Carousel navigation has no failure modes; everything here comes from the
//! host side: the terminal, the log file, or the tracing subscriber. Link failures are reported in the
//! status bar and never abort the app.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing, or event reading failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// The log file could not be created
    #[error("cannot open log file {}: {source}", .path.display())]
    Logging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global subscriber was already installed
    #[error("cannot install tracing subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

pub type AppResult<T> = Result<T, AppError>;
