//! Textual command language
//!
//! Commands are short whitespace-separated lines such as `insert 42`,
//! `put apple red fruit` or `dfs A`. Which verbs are accepted depends on the
//! selected [`StructureKind`]; see [`parse::parse_command`].

pub mod parse;

pub use parse::parse_command;

use crate::engine::errors::CommandError;
use crate::structures::Number;
use std::fmt;
use std::str::FromStr;

/// The six structures a session owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    LinkedList,
    Stack,
    Queue,
    Tree,
    HashTable,
    Graph,
}

impl StructureKind {
    pub const ALL: [StructureKind; 6] = [
        StructureKind::LinkedList,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::Tree,
        StructureKind::HashTable,
        StructureKind::Graph,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "linked list",
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
            StructureKind::Tree => "binary search tree",
            StructureKind::HashTable => "hash table",
            StructureKind::Graph => "graph",
        }
    }

    /// Next structure in [`ALL`](Self::ALL) order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// One-line usage hint for the command prompt
    pub fn usage(self) -> &'static str {
        match self {
            StructureKind::LinkedList => {
                "head N | tail N | insert N [at P] | delete N | search N | clear"
            }
            StructureKind::Stack => "push N | pop | peek | clear",
            StructureKind::Queue => "enqueue N | dequeue | peek | clear",
            StructureKind::Tree => {
                "insert N | delete N | search N | inorder | preorder | postorder | clear"
            }
            StructureKind::HashTable => "put KEY VALUE | get KEY | has KEY | delete KEY | clear",
            StructureKind::Graph => {
                "vertex V | edge A B | unvertex V | unedge A B | dfs V | bfs V | clear"
            }
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StructureKind {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "linked-list" | "linkedlist" => Ok(StructureKind::LinkedList),
            "stack" => Ok(StructureKind::Stack),
            "queue" => Ok(StructureKind::Queue),
            "tree" | "bst" | "binary-tree" => Ok(StructureKind::Tree),
            "hash" | "table" | "hash-table" | "hashtable" => Ok(StructureKind::HashTable),
            "graph" => Ok(StructureKind::Graph),
            other => Err(CommandError::UnknownStructure(other.to_string())),
        }
    }
}

/// A parsed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Linked list
    InsertHead(Number),
    InsertTail(Number),
    InsertAt { value: Number, position: usize },

    // Stack and queue
    Push(Number),
    Pop,
    Enqueue(Number),
    Dequeue,
    Peek,

    // Tree (delete and search are shared with the list)
    Insert(Number),
    Delete(Number),
    Search(Number),
    InOrder,
    PreOrder,
    PostOrder,

    // Hash table
    Put { key: String, value: String },
    Get(String),
    Has(String),
    Remove(String),

    // Graph
    AddVertex(String),
    AddEdge(String, String),
    RemoveVertex(String),
    RemoveEdge(String, String),
    DepthFirst(String),
    BreadthFirst(String),

    Clear,
}
