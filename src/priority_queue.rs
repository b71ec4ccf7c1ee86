//! Fixed-capacity priority queue kept as a sorted flat buffer.
//!
//! Tasks sit in ascending priority order, so the maximum is always the last
//! occupied slot. Inserting finds its slot by binary search and shifts the tail
//! right by one; removing the maximum only shrinks the used range.

use tracing::debug;

use crate::error::QueueError;
use crate::types::{Priority, Task};

/// Which task wins among equal priorities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The most recently inserted task is served first.
    #[default]
    NewestFirst,
    /// The earliest inserted task is served first.
    OldestFirst,
}

/// A bounded, priority-ordered task buffer.
#[derive(Debug)]
pub struct BoundedPriorityQueue {
    // Slots `0..count` are occupied and sorted; the rest are vacant.
    slots: Box<[Option<Task>]>,
    count: usize,
    tie_break: TieBreak,
}

impl BoundedPriorityQueue {
    /// Create an empty queue holding up to `capacity` tasks, newest-first on ties.
    #[allow(dead_code)]
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::with_tie_break(capacity, TieBreak::default())
    }

    /// Create an empty queue with an explicit tie policy.
    pub fn with_tie_break(capacity: usize, tie_break: TieBreak) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity(0));
        }
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Ok(Self {
            slots,
            count: 0,
            tie_break,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Insert a task at its ordered position; rejected without changes when full.
    pub fn insert(&mut self, task: Task) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::QueueFull);
        }
        let position = self.insertion_point(task.priority);
        // Slot `count` is vacant since the queue is not full; rotating brings it
        // down to `position` and moves every occupied slot after it up by one.
        self.slots[position..=self.count].rotate_right(1);
        self.slots[position] = Some(task);
        self.count += 1;
        Ok(())
    }

    /// The highest-priority task, if any.
    pub fn peek_maximum(&self) -> Option<&Task> {
        let last = self.count.checked_sub(1)?;
        self.slots[last].as_ref()
    }

    /// Remove and return the highest-priority task.
    ///
    /// An empty queue yields [`QueueError::EmptyQueue`] and is left untouched.
    pub fn remove_maximum(&mut self) -> Result<Task, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        self.count -= 1;
        self.slots[self.count].take().ok_or(QueueError::EmptyQueue)
    }

    /// Remove tasks from the highest priority down until the queue is empty.
    pub fn drain(&mut self) -> Drain<'_> {
        Drain { queue: self }
    }

    /// Stored tasks from lowest to highest priority.
    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.slots[..self.count].iter().flatten()
    }

    /// Release the storage, returning how many tasks were still queued.
    ///
    /// Consumes the queue, so it cannot be used after teardown.
    pub fn teardown(self) -> usize {
        debug!(
            capacity = self.capacity(),
            discarded = self.count,
            "tearing down queue"
        );
        self.count
    }

    /// First position whose task must come after a new task of `priority`.
    fn insertion_point(&self, priority: Priority) -> usize {
        let (mut low, mut high) = (0, self.count);
        while low < high {
            let mid = low + (high - low) / 2;
            let stored = self.priority_at(mid);
            let goes_after = match self.tie_break {
                TieBreak::NewestFirst => stored <= priority,
                TieBreak::OldestFirst => stored < priority,
            };
            if goes_after {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    fn priority_at(&self, index: usize) -> Priority {
        match &self.slots[index] {
            Some(task) => task.priority,
            None => unreachable!("vacant slot {index} inside the used range"),
        }
    }
}

/// Iterator returned by [`BoundedPriorityQueue::drain`].
pub struct Drain<'a> {
    queue: &'a mut BoundedPriorityQueue,
}

impl Iterator for Drain<'_> {
    type Item = Task;

    fn next(&mut self) -> Option<Task> {
        self.queue.remove_maximum().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl ExactSizeIterator for Drain<'_> {}
