//! Task scheduler CLI library.
//!
//! This crate provides the command-line interface, the interactive REPL,
//! and the command session that drives a `scheduler_queue::PriorityQueue`.

pub mod cli;
pub mod error;
pub mod repl;
pub mod session;

pub use error::{CliError, Result};
pub use repl::{Repl, ReplCommand};
pub use session::Session;
