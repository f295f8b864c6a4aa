pub mod graph;
pub mod linear;
pub mod list;
pub mod table;
pub mod tree;

// Each module adds `impl Session` blocks that run one structure's commands
// and record their traces

use crate::command::{Command, StructureKind};
use crate::engine::errors::CommandError;

/// Error for a command routed to a structure that has no such operation
pub(crate) fn unsupported(command: &Command, kind: StructureKind) -> CommandError {
    CommandError::Unsupported {
        verb: verb_of(command).to_string(),
        structure: kind.name(),
    }
}

fn verb_of(command: &Command) -> &'static str {
    match command {
        Command::InsertHead(_) => "head",
        Command::InsertTail(_) => "tail",
        Command::InsertAt { .. } => "insert",
        Command::Push(_) => "push",
        Command::Pop => "pop",
        Command::Enqueue(_) => "enqueue",
        Command::Dequeue => "dequeue",
        Command::Peek => "peek",
        Command::Insert(_) => "insert",
        Command::Delete(_) => "delete",
        Command::Search(_) => "search",
        Command::InOrder => "inorder",
        Command::PreOrder => "preorder",
        Command::PostOrder => "postorder",
        Command::Put { .. } => "put",
        Command::Get(_) => "get",
        Command::Has(_) => "has",
        Command::Remove(_) => "delete",
        Command::AddVertex(_) => "vertex",
        Command::AddEdge(..) => "edge",
        Command::RemoveVertex(_) => "unvertex",
        Command::RemoveEdge(..) => "unedge",
        Command::DepthFirst(_) => "dfs",
        Command::BreadthFirst(_) => "bfs",
        Command::Clear => "clear",
    }
}
