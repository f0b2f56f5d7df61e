//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Scheduler - interactive task manager backed by a priority queue
#[derive(Parser, Debug)]
#[command(name = "scheduler")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format for task listings
    #[arg(short, long, env = "SCHEDULER_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Path to the line-editing history file
    #[arg(long, env = "SCHEDULER_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Do not load or save line-editing history
    #[arg(long)]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive REPL mode (default)
    Repl,

    /// Execute commands from a file, one per line ("-" reads stdin)
    Run {
        /// Command file to execute
        #[arg(required = true)]
        path: PathBuf,
    },
}

/// Output format for task output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Table,
    /// One JSON value per line
    Json,
}

impl Cli {
    /// Returns the history file path, or `None` when history is disabled.
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        Some(self.history_file.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".scheduler"))
                .unwrap_or_else(|| PathBuf::from(".scheduler"))
                .join("history.txt")
        }))
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
