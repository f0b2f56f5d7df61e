//! Error types for the scheduler CLI.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Errors that end a command session.
///
/// Bad user input is not an error: it is parsed into
/// [`ReplCommand::Invalid`](crate::ReplCommand::Invalid) and reported inline.
#[derive(Error, Debug)]
pub enum CliError {
    /// Line editor failure.
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),

    /// Failed to open a command file.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read commands or write output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to render JSON output.
    #[error("failed to serialize: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
