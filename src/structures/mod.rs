//! The in-memory data structures
//!
//! This module provides the six engines driven by the visualizer:
//! - [`linked_list`]: Singly linked list with exclusively owned nodes
//! - [`stack`]: LIFO container
//! - [`queue`]: FIFO container
//! - [`bst`]: Unbalanced binary search tree stored in a node arena
//! - [`hash_table`]: Fixed-size hash table with separate chaining
//! - [`graph`]: Undirected graph backed by adjacency lists
//!
//! # Absence, not errors
//!
//! Queries against missing values return `None` (or a `bool`), never an
//! error. The only operations that report a reason for failing are the
//! capacity-limited and duplicate-rejecting tree insert and the self-loop
//! check on graph edges; those return [`OpError`].
//!
//! Engines never log and never know about traces. The operation layer in
//! [`engine::ops`](crate::engine::ops) turns their results into steps.

pub mod bst;
pub mod error;
pub mod graph;
pub mod hash_table;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use error::OpError;

/// Value type stored by the list, stack, queue and tree
pub type Number = i64;
