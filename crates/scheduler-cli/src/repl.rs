//! Interactive REPL (Read-Eval-Print Loop) for the task scheduler.

use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::session::Session;

/// Commands available in the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Queue a task
    Add { name: String, priority: i64 },
    /// Remove and show the highest-priority task
    Next,
    /// Show the highest-priority task without removing it
    Peek,
    /// List queued tasks, in heap order or extraction order
    List { sorted: bool },
    /// Show the number of queued tasks
    Len,
    /// Show help
    Help,
    /// Quit the REPL
    Quit,
    /// Well-known command with bad arguments; carries the message to show
    Invalid(String),
    /// Unknown command
    Unknown(String),
    /// Blank line
    Empty,
}

impl ReplCommand {
    /// Parses a line of input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((first, args)) = parts.split_first() else {
            return ReplCommand::Empty;
        };
        let cmd = first.to_lowercase();

        match cmd.as_str() {
            "add" | "a" => parse_add(args),
            "next" | "n" => ReplCommand::Next,
            "peek" | "top" => ReplCommand::Peek,
            "list" | "ls" | "l" => match args {
                [] => ReplCommand::List { sorted: false },
                [flag] if matches!(*flag, "sorted" | "--sorted" | "-s") => {
                    ReplCommand::List { sorted: true }
                }
                _ => ReplCommand::Invalid("Usage: list [sorted]".to_string()),
            },
            "len" | "count" => ReplCommand::Len,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(cmd),
        }
    }
}

/// `add <name...> <priority>`: every word but the last forms the name.
fn parse_add(args: &[&str]) -> ReplCommand {
    let Some((raw_priority, name_parts)) = args.split_last() else {
        return ReplCommand::Invalid("Usage: add <name> <priority>".to_string());
    };
    if name_parts.is_empty() {
        return ReplCommand::Invalid("Usage: add <name> <priority>".to_string());
    }

    match raw_priority.parse::<i64>() {
        Ok(priority) => ReplCommand::Add {
            name: name_parts.join(" "),
            priority,
        },
        Err(_) => ReplCommand::Invalid(format!(
            "Invalid priority '{}': must be an integer",
            raw_priority
        )),
    }
}

/// REPL state
pub struct Repl {
    editor: DefaultEditor,
    session: Session,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL instance.
    ///
    /// History is loaded from `history_path` when it exists.
    pub fn new(history_path: Option<PathBuf>, format: OutputFormat) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = history_path.as_ref().filter(|p| p.exists()) {
            if let Err(e) = editor.load_history(path) {
                warn!(path = %path.display(), error = %e, "Failed to load history");
            }
        }

        Ok(Self {
            editor,
            session: Session::new(format),
            history_path,
        })
    }

    /// Runs the REPL loop until `quit`, EOF, or an editor error.
    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        println!("Task Scheduler - type 'help' for commands");

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(&line)?;
                    }

                    let cmd = ReplCommand::parse(&line);
                    debug!(?cmd, "Parsed command");

                    if self.session.execute(cmd, &mut stdout)? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Don't exit on Ctrl+C, just clear line
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    println!("Goodbye!");
                    break;
                }
                Err(err) => {
                    self.save_history();
                    return Err(err.into());
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        let Some(path) = &self.history_path else {
            return;
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "Failed to create history directory");
                return;
            }
        }
        if let Err(e) = self.editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "Failed to save history");
        }
    }
}
