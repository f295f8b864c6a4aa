//! Singly linked list
//!
//! Nodes are owned by their predecessor (or by the list for the head) through
//! `Option<Box<ListNode>>`, so unlinking a node drops it and nothing can
//! observe it afterwards. There is no tail pointer: every operation except
//! [`LinkedList::insert_at_head`] walks from the head.

use super::Number;

/// A single node in the list
#[derive(Debug)]
pub struct ListNode {
    pub value: Number,
    next: Option<Box<ListNode>>,
}

impl ListNode {
    fn new(value: Number, next: Option<Box<ListNode>>) -> Self {
        ListNode { value, next }
    }

    /// The node following this one, if any
    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }
}

/// Singly linked list of numbers
#[derive(Debug, Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert a value in front of the current head. O(1).
    pub fn insert_at_head(&mut self, value: Number) {
        let old_head = self.head.take();
        self.head = Some(Box::new(ListNode::new(value, old_head)));
        self.len += 1;
    }

    /// Append a value after the last node
    pub fn insert_at_tail(&mut self, value: Number) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(ListNode::new(value, None)));
        self.len += 1;
    }

    /// Insert a value so that it ends up at `position`.
    ///
    /// Positions past the end are clamped to the length, which makes this a
    /// tail insert. Returns the position the value actually landed at.
    pub fn insert_at_position(&mut self, value: Number, position: usize) -> usize {
        let position = position.min(self.len);
        let mut slot = &mut self.head;
        for _ in 0..position {
            match slot {
                Some(node) => slot = &mut node.next,
                None => break,
            }
        }
        let rest = slot.take();
        *slot = Some(Box::new(ListNode::new(value, rest)));
        self.len += 1;
        position
    }

    /// Remove the first node holding `value`.
    ///
    /// Returns the position the node occupied, or `None` when no node matched
    /// (the list is left untouched).
    pub fn delete(&mut self, value: Number) -> Option<usize> {
        let mut slot = &mut self.head;
        let mut position = 0;
        loop {
            match slot {
                None => return None,
                Some(node) if node.value == value => break,
                Some(node) => {
                    slot = &mut node.next;
                    position += 1;
                }
            }
        }
        // The loop only breaks on a matching node
        if let Some(mut removed) = slot.take() {
            *slot = removed.next.take();
            self.len -= 1;
        }
        Some(position)
    }

    /// Position of the first node holding `value`
    pub fn search(&self, value: Number) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    /// Values from head to tail
    pub fn to_vec(&self) -> Vec<Number> {
        self.iter().collect()
    }

    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }
}

impl Clone for LinkedList {
    // Rebuilt through a tail slot; a derived clone recurses once per node
    fn clone(&self) -> Self {
        let mut copy = LinkedList::new();
        let mut slot = &mut copy.head;
        for value in self.iter() {
            let node = slot.insert(Box::new(ListNode::new(value, None)));
            slot = &mut node.next;
        }
        copy.len = self.len;
        copy
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop can overflow on long lists
        self.clear();
    }
}

/// Borrowing iterator over list values
pub struct Iter<'a> {
    current: Option<&'a ListNode>,
}

impl Iterator for Iter<'_> {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        let node = self.current?;
        self.current = node.next();
        Some(node.value)
    }
}
