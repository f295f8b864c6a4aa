//! Error types for the visualizer engine
//!
//! This module defines three families of errors:
//!
//! - [`OpError`]: the reason an engine operation declined to mutate a
//!   structure (capacity reached, duplicate value, missing key, ...). These are
//!   ordinary results, reported in a trace's outcome and never fatal. Defined
//!   next to the engines in [`structures`](crate::structures) and re-exported
//!   here.
//! - [`CommandError`]: a command line could not be parsed, or names an
//!   operation the selected structure does not support.
//! - [`ConfigError`]: an [`EngineConfig`](super::config::EngineConfig) value
//!   is out of range.

pub use crate::structures::error::OpError;

/// A command line that could not be turned into an operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownVerb(String),

    #[error("'{verb}' expects {expected}")]
    MissingArgument { verb: String, expected: &'static str },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("unexpected argument '{0}'")]
    TrailingArgument(String),

    #[error("'{verb}' is not supported by the {structure}")]
    Unsupported { verb: String, structure: &'static str },

    #[error("unknown structure '{0}' (expected list, stack, queue, tree, hash or graph)")]
    UnknownStructure(String),
}

/// An engine configuration value outside its valid range
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("bucket count must be at least 1")]
    ZeroBuckets,

    #[error("tree capacity must be at least 1")]
    ZeroCapacity,

    #[error("step delay must be non-zero")]
    ZeroStepDelay,
}
