//! Tree layout
//!
//! Places each node of a [`TreeView`] on a grid: the column is the node's
//! in-order rank and the row is its depth. A node's rank is the rank of the
//! leftmost node in its subtree plus the size of its left subtree, so the
//! whole layout falls out of the `subtree_size` values the snapshot already
//! carries.

use crate::trace::TreeView;

/// Grid position of one node, indexed like `TreeView::nodes`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePosition {
    pub column: usize,
    pub row: usize,
}

/// Compute a position for every node in `tree`
pub fn tree_layout(tree: &TreeView) -> Vec<NodePosition> {
    let mut positions = vec![NodePosition { column: 0, row: 0 }; tree.nodes.len()];
    let Some(root) = tree.root else {
        return positions;
    };

    // (node index, column of the leftmost node in its subtree)
    let mut stack = vec![(root, 0usize)];
    while let Some((index, base)) = stack.pop() {
        let Some(node) = tree.nodes.get(index) else {
            continue;
        };
        let left_size = node
            .left
            .and_then(|l| tree.nodes.get(l))
            .map_or(0, |l| l.subtree_size);
        let column = base + left_size;
        positions[index] = NodePosition {
            column,
            row: node.depth,
        };
        if let Some(left) = node.left {
            stack.push((left, base));
        }
        if let Some(right) = node.right {
            stack.push((right, column + 1));
        }
    }
    positions
}
