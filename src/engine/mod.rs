//! Visualizer engine
//!
//! - [`session`]: the [`Session`](session::Session) that owns every
//!   structure and the in-flight playback
//! - [`ops`]: per-structure command execution, each producing a
//!   [`Trace`](crate::trace::Trace)
//! - [`errors`]: operation, command and configuration error types
//! - [`config`] and [`constants`]: capacity limits and playback cadence
//!
//! # Execution model
//!
//! A command is applied to its structure synchronously and in full. The
//! trace it produces is only a record of what happened; replaying it (or
//! abandoning the replay part-way) never touches the structure again.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ops;
pub mod session;

pub use config::EngineConfig;
pub use session::Session;
