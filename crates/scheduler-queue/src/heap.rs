//! TaskHeap - array mechanics of the binary max-heap.
//!
//! Layout is 0-indexed: the parent of `i` is `(i - 1) / 2`, its children
//! are `2i + 1` and `2i + 2`. Every task in the array carries its own
//! position in `Task::index`, kept current by `swap`, `push` and `pop`.
//!
//! `push` and `pop` only touch the tail of the array. Restoring the heap
//! property afterwards is the caller's job, via `sift_up` / `sift_down`.

use crate::task::Task;

/// Backing array of the priority queue.
#[derive(Debug, Default)]
pub(crate) struct TaskHeap {
    tasks: Vec<Task>,
    /// Sequence number handed to the next pushed task.
    next_seq: u64,
}

impl TaskHeap {
    /// Returns the number of tasks in the heap.
    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the heap holds no tasks.
    pub(crate) fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Reports whether the task at `i` ranks ahead of the task at `j`.
    ///
    /// Higher priority ranks first. For equal priorities the task pushed
    /// earlier ranks first, which makes extraction FIFO within a priority.
    pub(crate) fn less(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.tasks[i], &self.tasks[j]);
        match a.priority().cmp(&b.priority()) {
            std::cmp::Ordering::Equal => a.seq() < b.seq(),
            ord => ord.is_gt(),
        }
    }

    /// Swaps the tasks at `i` and `j` and updates their indices.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.tasks.swap(i, j);
        self.tasks[i].set_index(Some(i));
        self.tasks[j].set_index(Some(j));
    }

    /// Appends a task at the tail and records its index.
    ///
    /// Does not restore the heap property.
    pub(crate) fn push(&mut self, mut task: Task) {
        task.set_seq(self.next_seq);
        self.next_seq += 1;
        task.set_index(Some(self.tasks.len()));
        self.tasks.push(task);
    }

    /// Removes the tail task and marks it as no longer queued.
    pub(crate) fn pop(&mut self) -> Option<Task> {
        let mut task = self.tasks.pop()?;
        task.set_index(None);
        Some(task)
    }

    /// Moves the task at `i` toward the root while it outranks its parent.
    pub(crate) fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    /// Moves the task at `i` toward the leaves while a child outranks it.
    ///
    /// At each level the task is swapped with the higher-ranked child.
    pub(crate) fn sift_down(&mut self, mut i: usize) {
        let n = self.tasks.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;

            let mut best = i;
            if left < n && self.less(left, best) {
                best = left;
            }
            if right < n && self.less(right, best) {
                best = right;
            }
            if best == i {
                break;
            }

            self.swap(i, best);
            i = best;
        }
    }

    /// Returns the root task, if any.
    pub(crate) fn first(&self) -> Option<&Task> {
        self.tasks.first()
    }

    /// Returns the backing array in heap order.
    pub(crate) fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}
