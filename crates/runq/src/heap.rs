//! Array-backed binary min-heap

use crate::node::{compare, HeapNode};
use std::cmp::Ordering;

/// A binary min-heap stored in a contiguous, zero-indexed `Vec`.
///
/// The complete binary tree is encoded with index arithmetic instead of
/// explicit links: `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`,
/// `right(i) = 2i + 2`. The invariant is that every parent compares
/// less-than-or-equal to its children under [`compare`], which makes index 0
/// a global minimum.
///
/// All operations are synchronous and non-blocking; `peek` is O(1), `push`
/// and `pop` are O(log n). An empty heap is a normal steady state for a
/// polling scheduler, so `peek` and `pop` return `None` rather than an
/// error.
///
/// The heap holds no locks. Share one across threads by wrapping the whole
/// structure, e.g. with [`SharedQueue`](crate::SharedQueue).
#[derive(Debug, Clone)]
pub struct MinHeap<T: HeapNode> {
    nodes: Vec<T>,
}

impl<T: HeapNode> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty heap with at least the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the heap holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the minimum node without removing it, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Inserts a node, restoring the heap invariant by sifting it toward
    /// the root.
    ///
    /// The node must not already be present in this heap and its id must be
    /// unique here; see the [`HeapNode`] caller contracts.
    pub fn push(&mut self, node: T) {
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the minimum node, or `None` if empty.
    ///
    /// The last node takes the vacated root slot and sifts toward the
    /// leaves until neither child is smaller.
    pub fn pop(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        let min = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// The backing storage in tree order. Beyond index 0 being the minimum,
    /// the order is unspecified.
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }

    /// Moves the node at `pos` toward the root until its parent no longer
    /// compares greater.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if compare(&self.nodes[parent], &self.nodes[pos]) == Ordering::Greater {
                self.nodes.swap(parent, pos);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the node at `pos` toward the leaves until neither child
    /// compares smaller.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // The right child is promoted only when strictly smaller than
            // the left, so the left child wins ties. This keeps extraction
            // deterministic under equal keys.
            let child = if right < len
                && compare(&self.nodes[right], &self.nodes[left]) == Ordering::Less
            {
                right
            } else {
                left
            };
            if compare(&self.nodes[child], &self.nodes[pos]) == Ordering::Less {
                self.nodes.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}

impl<T: HeapNode> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
