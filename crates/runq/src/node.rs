//! The node bound the heap orders by, and its total order

use std::cmp::Ordering;

/// A unit of pending work that can live in a [`MinHeap`](crate::MinHeap).
///
/// The heap reads exactly two things from a node: a priority key
/// (`sort_index`, lower pops first) and an integer identity (`id`) used as a
/// deterministic tiebreak among equal keys. Everything else a node carries is
/// opaque to the heap.
///
/// # Caller contracts
///
/// These are not runtime-checked; violating them silently corrupts the heap
/// order rather than producing an error:
///
/// - `id` must be unique among all nodes ever inserted into one heap
///   instance. Assign ids monotonically at creation time to get FIFO order
///   among equal-priority nodes ([`TaskQueue`](crate::TaskQueue) does this
///   stamping for you).
/// - A node's `sort_index` must not change while the node resides in a heap.
///   There is no reorder operation; a priority change is pop-and-reinsert.
/// - The same node must not be inserted twice into one heap instance.
pub trait HeapNode {
    /// The priority key type. Lower values pop first.
    ///
    /// Keys are read by value on every comparison, so this should be a cheap
    /// `Copy` type: an integer rank, a tick count, an `Instant` deadline.
    type Priority: Ord + Copy;

    /// The node's identity, unique per node within a heap instance.
    fn id(&self) -> u64;

    /// The node's priority key at insertion time.
    fn sort_index(&self) -> Self::Priority;
}

/// The total order the heap maintains: `sort_index` ascending, then `id`
/// ascending.
///
/// `Ordering::Equal` is only possible when `a` and `b` are the same logical
/// entry, since ids are unique per heap.
#[inline]
pub fn compare<T: HeapNode>(a: &T, b: &T) -> Ordering {
    a.sort_index()
        .cmp(&b.sort_index())
        .then_with(|| a.id().cmp(&b.id()))
}

/// A concrete heap node: an id-stamped payload with a priority key.
///
/// This is what [`TaskQueue`](crate::TaskQueue) stores. Callers with their
/// own node types implement [`HeapNode`] directly instead.
#[derive(Debug, Clone)]
pub struct Scheduled<K, T> {
    id: u64,
    sort_index: K,
    payload: T,
}

impl<K: Ord + Copy, T> Scheduled<K, T> {
    /// Creates a node with an explicit id.
    ///
    /// Ids must be unique within the destination heap; prefer letting
    /// [`TaskQueue`](crate::TaskQueue) stamp them.
    pub fn new(id: u64, sort_index: K, payload: T) -> Self {
        Self {
            id,
            sort_index,
            payload,
        }
    }

    /// The stamped id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The priority key.
    pub fn sort_index(&self) -> K {
        self.sort_index
    }

    /// Borrows the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consumes the node, returning the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<K: Ord + Copy, T> HeapNode for Scheduled<K, T> {
    type Priority = K;

    fn id(&self) -> u64 {
        self.id
    }

    fn sort_index(&self) -> K {
        self.sort_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_primary_key() {
        let a = Scheduled::new(1, 10, ());
        let b = Scheduled::new(2, 20, ());
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_compare_id_breaks_ties() {
        // Same sort_index: the earlier id wins
        let a = Scheduled::new(1, 10, ());
        let b = Scheduled::new(2, 10, ());
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_compare_equal_only_for_same_entry() {
        let a = Scheduled::new(7, 3, ());
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_scheduled_accessors() {
        let node = Scheduled::new(42, 5, "payload");
        assert_eq!(node.id(), 42);
        assert_eq!(node.sort_index(), 5);
        assert_eq!(*node.payload(), "payload");
        assert_eq!(node.into_payload(), "payload");
    }
}
