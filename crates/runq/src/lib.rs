//! Runq — a run-queue ordering primitive for cooperative task schedulers
//!
//! This crate provides the priority-selection core that answers "what is the
//! next thing to run?" among a dynamically changing set of pending items:
//! - An array-backed binary min-heap ([`MinHeap`]) over caller-defined nodes
//! - The node bound ([`HeapNode`]) exposing a priority key and an id tiebreak
//! - An id-stamping queue layer ([`TaskQueue`]) for FIFO order among equal
//!   priorities, and a lock-guarded shared handle ([`SharedQueue`])
//!
//! The heap itself is single-threaded and fully synchronous; every operation
//! runs to completion with no internal locking. Callers that share a queue
//! across threads wrap it in [`SharedQueue`], which serializes access around
//! the whole structure rather than adding fine-grained locks inside it.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod heap;
pub mod node;
pub mod queue;

pub use heap::MinHeap;
pub use node::{compare, HeapNode, Scheduled};
pub use queue::{SharedQueue, TaskQueue};
