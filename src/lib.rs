//! # Introduction
//!
//! structviz runs operations on six classic data structures (linked list,
//! stack, queue, binary search tree, hash table and graph) and records each
//! operation as a replayable trace of the steps it took. Traces are stepped
//! through in a terminal UI built with [ratatui](https://docs.rs/ratatui), or
//! printed as JSON for other renderers.
//!
//! ## Pipeline
//!
//! ```text
//! Command line → Parser → Session → Engine op → Trace → Playback → TUI / JSON
//! ```
//!
//! 1. [`command`]: parses text such as `insert 42` or `put apple red` into a
//!    [`command::Command`] for the selected [`command::StructureKind`].
//! 2. [`engine`]: the [`engine::Session`] applies the command to its
//!    structure and builds a [`trace::Trace`].
//! 3. [`structures`]: the six data structures, usable on their own.
//! 4. [`trace`]: the step vocabulary, structure snapshots and
//!    [`trace::Playback`], the cursor a renderer advances through a trace.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod command;
pub mod engine;
pub mod structures;
pub mod trace;
pub mod ui;
