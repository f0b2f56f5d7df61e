//! PriorityQueue - highest-priority-first access to tasks.
//!
//! The queue is single-owner: every operation takes `&self` or `&mut self`
//! and completes synchronously. Callers that share a queue across threads
//! wrap it in their own lock.

use tracing::trace;

use crate::heap::TaskHeap;
use crate::task::Task;

/// Max-heap priority queue of tasks.
///
/// # Ordering
///
/// - Higher priority tasks come out first
/// - Among equal priorities, the task added first comes out first
///
/// # Complexity
///
/// `add` and `next` are O(log n). `peek`, `len` and `tasks` are O(1).
///
/// # Example
///
/// ```
/// use scheduler_queue::{PriorityQueue, Task};
///
/// let mut queue = PriorityQueue::new();
/// queue.add(Task::new("Buy groceries", 5));
/// queue.add(Task::new("Write code", 10));
/// queue.add(Task::new("Exercise", 3));
///
/// assert_eq!(queue.peek().map(Task::name), Some("Write code"));
///
/// let order: Vec<i64> = std::iter::from_fn(|| queue.next())
///     .map(|t| t.priority())
///     .collect();
/// assert_eq!(order, vec![10, 5, 3]);
/// assert!(queue.next().is_none());
/// ```
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: TaskHeap,
}

impl PriorityQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a task, taking ownership of it.
    pub fn add(&mut self, task: Task) {
        trace!(name = %task.name(), priority = task.priority(), "adding task");
        self.heap.push(task);
        self.heap.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the highest-priority task.
    ///
    /// Returns `None` if the queue is empty. The returned task's
    /// [`index`](Task::index) is `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Task> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let task = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.heap.sift_down(0);
        }

        trace!(name = %task.name(), priority = task.priority(), "removed task");
        Some(task)
    }

    /// Returns the highest-priority task without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.heap.first()
    }

    /// Returns the number of queued tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no tasks are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns all queued tasks in heap order.
    ///
    /// Heap order is not priority order beyond the first element. Use
    /// [`tasks_by_priority`](Self::tasks_by_priority) when order matters.
    pub fn tasks(&self) -> &[Task] {
        self.heap.as_slice()
    }

    /// Returns a snapshot of the queued tasks in the order `next` would
    /// return them.
    pub fn tasks_by_priority(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.heap.as_slice().iter().collect();
        tasks.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| a.seq().cmp(&b.seq()))
        });
        tasks
    }
}

impl Extend<Task> for PriorityQueue {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.add(task);
        }
    }
}

impl FromIterator<Task> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
