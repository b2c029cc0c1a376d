//! Id-stamping task queue and the lock-guarded shared handle

use crate::heap::MinHeap;
use crate::node::Scheduled;
use parking_lot::Mutex;
use std::sync::Arc;

/// A run queue that stamps monotonically increasing ids onto pushed work.
///
/// Equal-priority entries pop in insertion (FIFO) order because the heap
/// breaks `sort_index` ties by id and ids here only ever increase. This is
/// the id-allocation duty the heap leaves to its caller, packaged.
///
/// Like the heap it wraps, a `TaskQueue` assumes exclusive, non-interleaved
/// access. Use [`SharedQueue`] to share one across threads.
#[derive(Debug)]
pub struct TaskQueue<K: Ord + Copy, T> {
    heap: MinHeap<Scheduled<K, T>>,
    next_id: u64,
}

impl<K: Ord + Copy, T> TaskQueue<K, T> {
    /// Creates an empty queue. Ids start at 1.
    pub fn new() -> Self {
        Self {
            heap: MinHeap::new(),
            next_id: 1,
        }
    }

    /// Creates an empty queue with at least the given heap capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: MinHeap::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// Enqueues a payload under a priority key, returning the stamped id.
    pub fn push(&mut self, sort_index: K, payload: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.heap.push(Scheduled::new(id, sort_index, payload));
        id
    }

    /// Removes and returns the lowest-key entry, or `None` if empty.
    pub fn pop(&mut self) -> Option<Scheduled<K, T>> {
        self.heap.pop()
    }

    /// Returns the lowest-key entry without removing it, or `None` if empty.
    pub fn peek(&self) -> Option<&Scheduled<K, T>> {
        self.heap.peek()
    }

    /// The key of the next entry to pop, if any.
    ///
    /// A timer-style caller uses this to decide how long to wait before the
    /// next unit of work is due.
    pub fn next_sort_index(&self) -> Option<K> {
        self.heap.peek().map(|n| n.sort_index())
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: Ord + Copy, T> Default for TaskQueue<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable handle to a [`TaskQueue`] shared across threads.
///
/// The whole queue sits behind one mutex; each operation locks, delegates,
/// and unlocks. Serializing at this boundary keeps the single-threaded
/// O(log n) heap algorithm unchanged instead of pushing locks into it.
#[derive(Debug)]
pub struct SharedQueue<K: Ord + Copy, T> {
    inner: Arc<Mutex<TaskQueue<K, T>>>,
}

impl<K: Ord + Copy, T> SharedQueue<K, T> {
    /// Creates an empty shared queue.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TaskQueue::new())),
        }
    }

    /// Enqueues a payload under a priority key, returning the stamped id.
    pub fn push(&self, sort_index: K, payload: T) -> u64 {
        self.inner.lock().push(sort_index, payload)
    }

    /// Removes and returns the lowest-key entry, or `None` if empty.
    pub fn pop(&self) -> Option<Scheduled<K, T>> {
        self.inner.lock().pop()
    }

    /// The key of the next entry to pop, if any.
    pub fn next_sort_index(&self) -> Option<K> {
        self.inner.lock().next_sort_index()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl<K: Ord + Copy, T> Clone for SharedQueue<K, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord + Copy, T> Default for SharedQueue<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
