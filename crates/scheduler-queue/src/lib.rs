//! Priority queue of named tasks for the task scheduler.
//!
//! This crate provides the `PriorityQueue` for managing tasks with:
//! - A binary max-heap over a `Vec<Task>` (highest priority at index 0)
//! - O(log n) `add`/`next`, O(1) `peek`/`len`
//! - A heap position recorded on every queued `Task`
//! - FIFO ordering among tasks of equal priority
//!
//! # Example
//!
//! ```
//! use scheduler_queue::{PriorityQueue, Task};
//!
//! let mut queue = PriorityQueue::new();
//! queue.add(Task::new("Buy groceries", 5));
//! queue.add(Task::new("Write code", 10));
//!
//! // Highest priority comes out first
//! let task = queue.next().unwrap();
//! assert_eq!(task.name(), "Write code");
//! assert_eq!(queue.len(), 1);
//! ```
//!
//! The heap array behind the queue is internal; only `PriorityQueue`
//! can reorder tasks or move their recorded positions:
//!
//! ```compile_fail
//! use scheduler_queue::heap::TaskHeap;
//! ```

mod heap;
pub mod queue;
pub mod task;

pub use queue::PriorityQueue;
pub use task::Task;
