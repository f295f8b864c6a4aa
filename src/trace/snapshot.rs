//! Renderer-facing views of each structure
//!
//! A [`Snapshot`] is a plain-data copy of a structure's visible state. Tree
//! snapshots describe nodes by parent/child indices, depth and subtree size
//! and carry no coordinates; a renderer derives its own layout from them.

use crate::structures::{
    bst::BinarySearchTree, graph::Graph, hash_table::HashTable, linked_list::LinkedList,
    queue::Queue, stack::Stack, Number,
};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Display;

/// Anything that can describe its visible state for a renderer
pub trait Snapshotable {
    fn snapshot(&self) -> Snapshot;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum Snapshot {
    /// Values from head to tail
    LinkedList { values: Vec<Number> },
    /// Values from bottom to top
    Stack { values: Vec<Number> },
    /// Values from front to rear
    Queue { values: Vec<Number> },
    Tree(TreeView),
    HashTable { buckets: Vec<BucketView> },
    Graph {
        vertices: Vec<String>,
        edges: Vec<(String, String)>,
    },
}

impl Snapshot {
    /// Number of stored items (nodes, entries or vertices)
    pub fn item_count(&self) -> usize {
        match self {
            Snapshot::LinkedList { values }
            | Snapshot::Stack { values }
            | Snapshot::Queue { values } => values.len(),
            Snapshot::Tree(tree) => tree.nodes.len(),
            Snapshot::HashTable { buckets } => buckets.iter().map(|b| b.entries.len()).sum(),
            Snapshot::Graph { vertices, .. } => vertices.len(),
        }
    }
}

/// Tree nodes in pre-order; indices refer into `nodes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeView {
    pub root: Option<usize>,
    pub nodes: Vec<TreeNodeView>,
    pub capacity: usize,
}

impl TreeView {
    pub fn index_of(&self, value: Number) -> Option<usize> {
        self.nodes.iter().position(|n| n.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNodeView {
    pub value: Number,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub depth: usize,
    pub subtree_size: usize,
}

/// One bucket and its chain, rendered as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketView {
    pub index: usize,
    pub entries: Vec<(String, String)>,
}

impl Snapshotable for LinkedList {
    fn snapshot(&self) -> Snapshot {
        Snapshot::LinkedList {
            values: self.to_vec(),
        }
    }
}

impl Snapshotable for Stack {
    fn snapshot(&self) -> Snapshot {
        Snapshot::Stack {
            values: self.to_vec(),
        }
    }
}

impl Snapshotable for Queue {
    fn snapshot(&self) -> Snapshot {
        Snapshot::Queue {
            values: self.to_vec(),
        }
    }
}

impl Snapshotable for BinarySearchTree {
    fn snapshot(&self) -> Snapshot {
        let ids = self.nodes();
        let index: FxHashMap<_, _> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        let mut nodes: Vec<TreeNodeView> = ids
            .iter()
            .filter_map(|id| self.node(*id))
            .map(|node| TreeNodeView {
                value: node.value,
                parent: None,
                left: node.left.and_then(|c| index.get(&c).copied()),
                right: node.right.and_then(|c| index.get(&c).copied()),
                depth: 0,
                subtree_size: 1,
            })
            .collect();

        // Pre-order puts every parent before its children
        for i in 0..nodes.len() {
            let depth = nodes[i].depth;
            for child in [nodes[i].left, nodes[i].right].into_iter().flatten() {
                nodes[child].parent = Some(i);
                nodes[child].depth = depth + 1;
            }
        }
        // ...and every child after its parent, so sizes accumulate in reverse
        for i in (0..nodes.len()).rev() {
            if let Some(parent) = nodes[i].parent {
                nodes[parent].subtree_size += nodes[i].subtree_size;
            }
        }

        Snapshot::Tree(TreeView {
            root: if nodes.is_empty() { None } else { Some(0) },
            nodes,
            capacity: self.max_nodes(),
        })
    }
}

impl<V: Display> Snapshotable for HashTable<V> {
    fn snapshot(&self) -> Snapshot {
        Snapshot::HashTable {
            buckets: self
                .entries()
                .map(|(index, chain)| BucketView {
                    index,
                    entries: chain
                        .iter()
                        .map(|e| (e.key.clone(), e.value.to_string()))
                        .collect(),
                })
                .collect(),
        }
    }
}

impl Snapshotable for Graph {
    fn snapshot(&self) -> Snapshot {
        Snapshot::Graph {
            vertices: self.vertices().to_vec(),
            edges: self.edges(),
        }
    }
}
