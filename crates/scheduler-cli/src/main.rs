//! Scheduler CLI entry point.

use std::io;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use scheduler_cli::cli::{Cli, Commands, OutputFormat};
use scheduler_cli::{Repl, Result, Session};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let result = match &cli.command {
        Some(Commands::Run { path }) => run_script(path, cli.format),
        Some(Commands::Repl) | None => run_repl(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_repl(cli: &Cli) -> Result<()> {
    let mut repl = Repl::new(cli.history_path(), cli.format)?;
    repl.run()
}

fn run_script(path: &Path, format: OutputFormat) -> Result<()> {
    let mut session = Session::new(format);
    session.run_file(path, &mut io::stdout().lock())
}
