//! Binary search tree
//!
//! An unbalanced BST of unique numbers. Nodes live in an arena (`Vec` of
//! slots with a free list) and refer to their children by [`NodeId`], so
//! there are no parent/child reference cycles and removing a node is just
//! releasing its slot.
//!
//! # Capacity
//!
//! The tree holds at most `max_nodes` values. The limit is checked before
//! anything else on insert and a full tree is never mutated.
//!
//! # Traversals
//!
//! All walks use an explicit stack rather than recursion. Visit order is the
//! textbook one:
//! - in-order: left, node, right
//! - pre-order: node, left, right
//! - post-order: left, right, node

use super::Number;
use super::OpError;

/// Index of a node slot in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A tree node
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: Number,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Which structural case a successful delete went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCase {
    /// The node had no children and was detached
    Leaf,
    /// The node's only child took its place
    OneChild,
    /// The node took the value of its in-order successor, whose original
    /// node was then spliced out
    TwoChildren { successor: Number },
}

/// Unbalanced binary search tree
#[derive(Debug, Clone)]
pub struct BinarySearchTree {
    slots: Vec<Option<TreeNode>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    node_count: usize,
    max_nodes: usize,
}

impl BinarySearchTree {
    /// Create an empty tree holding at most `max_nodes` values
    pub fn new(max_nodes: usize) -> Self {
        BinarySearchTree {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            node_count: 0,
            max_nodes,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn value(&self, id: NodeId) -> Option<Number> {
        self.node(id).map(|n| n.value)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.right)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.node_count >= self.max_nodes
    }

    /// Insert a value, returning the id of the new node.
    ///
    /// Fails with [`OpError::CapacityExceeded`] when the tree is full and with
    /// [`OpError::DuplicateValue`] when the value is already present. In both
    /// cases the tree is unchanged.
    pub fn insert(&mut self, value: Number) -> Result<NodeId, OpError> {
        if self.is_full() {
            return Err(OpError::CapacityExceeded {
                limit: self.max_nodes,
            });
        }

        let Some(mut current) = self.root else {
            let id = self.allocate(value);
            self.root = Some(id);
            self.node_count += 1;
            return Ok(id);
        };

        loop {
            let node = self
                .node(current)
                .ok_or_else(|| OpError::NotFound(format!("node {}", current.0)))?;
            let next = if value < node.value {
                node.left
            } else if value > node.value {
                node.right
            } else {
                return Err(OpError::DuplicateValue(value));
            };

            match next {
                Some(child) => current = child,
                None => {
                    let id = self.allocate(value);
                    if let Some(parent) = self.node_mut(current) {
                        if value < parent.value {
                            parent.left = Some(id);
                        } else {
                            parent.right = Some(id);
                        }
                    }
                    self.node_count += 1;
                    return Ok(id);
                }
            }
        }
    }

    /// Binary descent looking for `value`
    pub fn search(&self, value: Number) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id)?;
            if value == node.value {
                return Some(id);
            }
            current = if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    pub fn contains(&self, value: Number) -> bool {
        self.search(value).is_some()
    }

    /// Every node visited while descending toward `value`.
    ///
    /// The walk stops on the matching node (which is the last element) or
    /// when the next child slot is empty. For a missing value the last element
    /// is the node the value would be attached under.
    pub fn find_path(&self, value: Number) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(id) = current {
            let Some(node) = self.node(id) else { break };
            path.push(id);
            if value == node.value {
                break;
            }
            current = if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        path
    }

    /// [`find_path`](Self::find_path) mapped to node values
    pub fn find_path_values(&self, value: Number) -> Vec<Number> {
        self.find_path(value)
            .into_iter()
            .filter_map(|id| self.value(id))
            .collect()
    }

    /// Remove `value` from the tree.
    ///
    /// `node_count` drops by exactly one on success whichever case applies.
    pub fn delete(&mut self, value: Number) -> Result<DeleteCase, OpError> {
        let (parent, target) = self
            .locate(value)
            .ok_or_else(|| OpError::NotFound(value.to_string()))?;

        let case = match (self.left(target), self.right(target)) {
            (None, None) => {
                self.replace_child(parent, target, None);
                self.release(target);
                DeleteCase::Leaf
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_child(parent, target, Some(child));
                self.release(target);
                DeleteCase::OneChild
            }
            (Some(_), Some(right)) => {
                // Minimum of the right subtree
                let mut successor_parent = target;
                let mut successor = right;
                while let Some(next) = self.left(successor) {
                    successor_parent = successor;
                    successor = next;
                }
                let successor_value = self
                    .value(successor)
                    .ok_or_else(|| OpError::NotFound(format!("node {}", successor.0)))?;

                if let Some(node) = self.node_mut(target) {
                    node.value = successor_value;
                }
                // The successor has no left child, so splicing its right child
                // up is the leaf/one-child removal of its original position
                let successor_right = self.right(successor);
                self.replace_child(Some(successor_parent), successor, successor_right);
                self.release(successor);
                DeleteCase::TwoChildren {
                    successor: successor_value,
                }
            }
        };

        self.node_count -= 1;
        Ok(case)
    }

    /// Values in left, node, right order
    pub fn in_order(&self) -> Vec<Number> {
        let mut result = Vec::with_capacity(self.node_count);
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.left(id);
            }
            if let Some(id) = stack.pop() {
                if let Some(value) = self.value(id) {
                    result.push(value);
                }
                current = self.right(id);
            }
        }
        result
    }

    /// Values in node, left, right order
    pub fn pre_order(&self) -> Vec<Number> {
        self.nodes()
            .into_iter()
            .filter_map(|id| self.value(id))
            .collect()
    }

    /// Values in left, right, node order
    pub fn post_order(&self) -> Vec<Number> {
        // Node, right, left reversed is left, right, node
        let mut result = Vec::with_capacity(self.node_count);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            result.push(node.value);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        result.reverse();
        result
    }

    /// Node ids in pre-order
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(self.node_count);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            result.push(id);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        result
    }

    /// Parent to child value pairs, pre-order, left edge before right edge
    pub fn edges(&self) -> Vec<(Number, Number)> {
        let mut edges = Vec::new();
        for id in self.nodes() {
            let Some(node) = self.node(id) else { continue };
            for child in [node.left, node.right].into_iter().flatten() {
                if let Some(child_value) = self.value(child) {
                    edges.push((node.value, child_value));
                }
            }
        }
        edges
    }

    /// Number of nodes in the subtree rooted at `id`, including itself
    pub fn subtree_size(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else { continue };
            count += 1;
            stack.extend(node.left);
            stack.extend(node.right);
        }
        count
    }

    /// Number of levels; an empty tree has height 0
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            height = height.max(depth);
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        height
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.node_count = 0;
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Find `value` and the parent linking to it
    fn locate(&self, value: Number) -> Option<(Option<NodeId>, NodeId)> {
        let mut parent = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id)?;
            if value == node.value {
                return Some((parent, id));
            }
            parent = Some(id);
            current = if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// Point whichever link of `parent` held `old` (or the root) at `new`
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                if let Some(node) = self.node_mut(parent) {
                    if node.left == Some(old) {
                        node.left = new;
                    } else if node.right == Some(old) {
                        node.right = new;
                    }
                }
            }
        }
    }

    fn allocate(&mut self, value: Number) -> NodeId {
        let node = TreeNode {
            value,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            if slot.take().is_some() {
                self.free.push(id.0);
            }
        }
    }
}
