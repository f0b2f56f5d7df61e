//! Task record held by the priority queue.

use serde::Serialize;
use std::fmt;

/// A named unit of work with an integer priority.
///
/// Higher priority values are more urgent. Ties are allowed; the queue
/// hands out equal-priority tasks in the order they were added.
///
/// The queue records each task's position in its backing array. That
/// bookkeeping is internal: it is `None` for a task that has not been
/// queued yet and again once the task has been removed with
/// [`PriorityQueue::next`](crate::PriorityQueue::next).
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    name: String,
    priority: i64,

    /// Insertion sequence number, assigned by the heap on push.
    #[serde(skip)]
    seq: u64,

    /// Current position in the heap array.
    #[serde(skip)]
    index: Option<usize>,
}

impl Task {
    /// Creates a new, unqueued task.
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        Self {
            name: name.into(),
            priority,
            seq: 0,
            index: None,
        }
    }

    /// Returns the task's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task's priority (higher = more urgent).
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Returns the task's current heap position, or `None` if it is not queued.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    pub(crate) fn set_seq(&mut self, seq: u64) {
        self.seq = seq;
    }

    pub(crate) fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }
}

/// Two tasks are equal when their name and priority match.
///
/// Heap bookkeeping is ignored, so a task compares equal to itself
/// before and after it leaves the queue.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.priority == other.priority
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {})", self.name, self.priority)
    }
}
