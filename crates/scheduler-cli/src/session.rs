//! Command session: executes parsed commands against a priority queue.
//!
//! The session owns the queue for the lifetime of the process and writes
//! all user-facing output to a caller-supplied writer, so the REPL and
//! batch mode share one implementation.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use scheduler_queue::{PriorityQueue, Task};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use crate::repl::ReplCommand;

/// A single user's task-scheduling session.
#[derive(Debug, Default)]
pub struct Session {
    queue: PriorityQueue,
    format: OutputFormat,
}

impl Session {
    /// Creates a session with an empty queue.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            queue: PriorityQueue::new(),
            format,
        }
    }

    /// Returns the session's queue.
    pub fn queue(&self) -> &PriorityQueue {
        &self.queue
    }

    /// Executes one command. Returns `Ok(true)` if the session should end.
    pub fn execute<W: Write>(&mut self, cmd: ReplCommand, out: &mut W) -> Result<bool> {
        match cmd {
            ReplCommand::Add { name, priority } => {
                let task = Task::new(name, priority);
                info!(name = %task.name(), priority, "Task added");
                match self.format {
                    OutputFormat::Table => writeln!(out, "Added task: {}", task.name())?,
                    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&task)?)?,
                }
                self.queue.add(task);
            }

            ReplCommand::Next => {
                let task = self.queue.next();
                if let Some(task) = &task {
                    info!(name = %task.name(), priority = task.priority(), "Task removed");
                }
                self.write_task(out, "Next task", task.as_ref())?;
            }

            ReplCommand::Peek => {
                self.write_task(out, "Top task", self.queue.peek())?;
            }

            ReplCommand::List { sorted } => {
                let tasks: Vec<&Task> = if sorted {
                    self.queue.tasks_by_priority()
                } else {
                    self.queue.tasks().iter().collect()
                };
                self.write_list(out, &tasks)?;
            }

            ReplCommand::Len => match self.format {
                OutputFormat::Table => {
                    let n = self.queue.len();
                    writeln!(out, "{} task{} queued", n, if n == 1 { "" } else { "s" })?
                }
                OutputFormat::Json => writeln!(out, "{}", self.queue.len())?,
            },

            ReplCommand::Help => write_help(out)?,

            ReplCommand::Quit => {
                writeln!(out, "Goodbye!")?;
                return Ok(true);
            }

            ReplCommand::Invalid(message) => writeln!(out, "{}", message)?,

            ReplCommand::Unknown(cmd) => writeln!(
                out,
                "Unknown command: {}. Type 'help' for available commands.",
                cmd
            )?,

            ReplCommand::Empty => {}
        }

        Ok(false)
    }

    /// Executes commands line by line until `quit` or end of input.
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let cmd = ReplCommand::parse(&line?);
            debug!(?cmd, "Parsed command");
            if self.execute(cmd, out)? {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Executes commands from a file, or from stdin when `path` is `-`.
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<()> {
        if path == Path::new("-") {
            info!("Reading commands from stdin");
            return self.run_script(io::stdin().lock(), out);
        }

        info!(path = %path.display(), "Reading commands from file");
        let file = File::open(path).map_err(|source| CliError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.run_script(BufReader::new(file), out)
    }

    fn write_task<W: Write>(&self, out: &mut W, label: &str, task: Option<&Task>) -> Result<()> {
        match (self.format, task) {
            (OutputFormat::Table, Some(task)) => writeln!(out, "{}: {}", label, task)?,
            (OutputFormat::Table, None) => writeln!(out, "No tasks.")?,
            (OutputFormat::Json, task) => writeln!(out, "{}", serde_json::to_string(&task)?)?,
        }
        Ok(())
    }

    fn write_list<W: Write>(&self, out: &mut W, tasks: &[&Task]) -> Result<()> {
        match self.format {
            OutputFormat::Table if tasks.is_empty() => writeln!(out, "No tasks.")?,
            OutputFormat::Table => {
                writeln!(out, "Current tasks:")?;
                for (i, task) in tasks.iter().enumerate() {
                    writeln!(out, "{}. {}", i + 1, task)?;
                }
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(tasks)?)?,
        }
        Ok(())
    }
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Task Scheduler Commands:")?;
    writeln!(out)?;
    writeln!(out, "  add <name> <priority>  Queue a task (higher priority runs first)")?;
    writeln!(out, "  next, n                Remove and show the highest-priority task")?;
    writeln!(out, "  peek, top              Show the highest-priority task")?;
    writeln!(out, "  list [sorted], ls      List queued tasks")?;
    writeln!(out, "  len, count             Show the number of queued tasks")?;
    writeln!(out, "  help, h, ?             Show this help")?;
    writeln!(out, "  quit, q, exit          Exit")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> (String, bool) {
        let mut out = Vec::new();
        let quit = session.execute(ReplCommand::parse(line), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), quit)
    }

    fn output(session: &mut Session, line: &str) -> String {
        run(session, line).0
    }

    #[test]
    fn test_add_and_next() {
        let mut session = Session::default();
        assert_eq!(output(&mut session, "add Buy groceries 5"), "Added task: Buy groceries\n");
        assert_eq!(output(&mut session, "add Write code 10"), "Added task: Write code\n");
        assert_eq!(session.queue().len(), 2);

        assert_eq!(output(&mut session, "next"), "Next task: Write code (priority 10)\n");
        assert_eq!(session.queue().len(), 1);
    }

    #[test]
    fn test_next_and_peek_empty() {
        let mut session = Session::default();
        assert_eq!(output(&mut session, "next"), "No tasks.\n");
        assert_eq!(output(&mut session, "peek"), "No tasks.\n");
        assert_eq!(session.queue().len(), 0);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut session = Session::default();
        output(&mut session, "add Exercise 3");
        assert_eq!(output(&mut session, "peek"), "Top task: Exercise (priority 3)\n");
        assert_eq!(session.queue().len(), 1);
    }

    #[test]
    fn test_invalid_priority_queues_nothing() {
        let mut session = Session::default();
        assert_eq!(
            output(&mut session, "add Write code ten"),
            "Invalid priority 'ten': must be an integer\n"
        );
        assert!(session.queue().is_empty());
    }

    #[test]
    fn test_list() {
        let mut session = Session::default();
        assert_eq!(output(&mut session, "list"), "No tasks.\n");

        output(&mut session, "add a 1");
        output(&mut session, "add b 2");
        output(&mut session, "add c 3");

        assert_eq!(
            output(&mut session, "list"),
            "Current tasks:\n1. c (priority 3)\n2. a (priority 1)\n3. b (priority 2)\n"
        );
        assert_eq!(
            output(&mut session, "list sorted"),
            "Current tasks:\n1. c (priority 3)\n2. b (priority 2)\n3. a (priority 1)\n"
        );
    }

    #[test]
    fn test_len() {
        let mut session = Session::default();
        assert_eq!(output(&mut session, "len"), "0 tasks queued\n");
        output(&mut session, "add a 1");
        assert_eq!(output(&mut session, "count"), "1 task queued\n");
    }

    #[test]
    fn test_quit() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "exit"), ("Goodbye!\n".to_string(), true));
        assert!(!run(&mut session, "help").1);
    }

    #[test]
    fn test_unknown_and_empty() {
        let mut session = Session::default();
        assert_eq!(
            output(&mut session, "frobnicate"),
            "Unknown command: frobnicate. Type 'help' for available commands.\n"
        );
        assert_eq!(output(&mut session, "   "), "");
    }

    #[test]
    fn test_json_format() {
        let mut session = Session::new(OutputFormat::Json);
        assert_eq!(
            output(&mut session, "add Write code 10"),
            "{\"name\":\"Write code\",\"priority\":10}\n"
        );
        output(&mut session, "add Exercise 3");

        assert_eq!(
            output(&mut session, "list sorted"),
            "[{\"name\":\"Write code\",\"priority\":10},{\"name\":\"Exercise\",\"priority\":3}]\n"
        );
        assert_eq!(output(&mut session, "len"), "2\n");
        assert_eq!(
            output(&mut session, "next"),
            "{\"name\":\"Write code\",\"priority\":10}\n"
        );
        output(&mut session, "next");
        assert_eq!(output(&mut session, "next"), "null\n");
        assert_eq!(output(&mut session, "list"), "[]\n");
    }

    #[test]
    fn test_run_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-commands.txt");
        let mut session = Session::default();
        let mut out = Vec::new();

        let result = session.run_file(&missing, &mut out);

        match result {
            Err(CliError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected Open error, got {:?}", other),
        }
        assert!(out.is_empty());
        assert!(session.queue().is_empty());
    }

    #[test]
    fn test_run_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.txt");
        std::fs::write(&path, "add Exercise 3\nadd Write code 10\npeek\n").unwrap();
        let mut session = Session::default();
        let mut out = Vec::new();

        session.run_file(&path, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Added task: Exercise\nAdded task: Write code\nTop task: Write code (priority 10)\n"
        );
        assert_eq!(session.queue().len(), 2);
    }

    #[test]
    fn test_run_script_stops_at_quit() {
        let mut session = Session::default();
        let script = "add a 1\n\nadd b 2\nquit\nadd c 3\n";
        let mut out = Vec::new();

        session.run_script(script.as_bytes(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Added task: a\nAdded task: b\nGoodbye!\n"
        );
        assert_eq!(session.queue().len(), 2);
    }
}
