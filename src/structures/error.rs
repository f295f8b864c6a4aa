// Failure reasons reported by the engines

use super::Number;

/// Why an engine operation left its structure unchanged
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    /// Tree insert attempted with `node_count == max_nodes`
    #[error("tree is full ({limit} nodes)")]
    CapacityExceeded { limit: usize },

    /// Tree insert of a value that is already stored
    #[error("value {0} already exists")]
    DuplicateValue(Number),

    /// Search, delete or lookup of something that is not stored
    #[error("{0} not found")]
    NotFound(String),

    /// Graph edge from a vertex to itself
    #[error("self-loop on vertex '{0}' is not allowed")]
    SelfLoop(String),

    /// Pop, dequeue or peek on an empty container
    #[error("{0} is empty")]
    Empty(&'static str),
}

impl OpError {
    /// Short stable code used as the `reason` of an outcome
    pub fn reason(&self) -> &'static str {
        match self {
            OpError::CapacityExceeded { .. } => "capacity",
            OpError::DuplicateValue(_) => "duplicate",
            OpError::NotFound(_) => "not_found",
            OpError::SelfLoop(_) => "self_loop",
            OpError::Empty(_) => "empty",
        }
    }
}
