//! LIFO stack of numbers
//!
//! The top of the stack is the end of the backing `Vec`, so `to_vec()`
//! returns values bottom-first.

use super::Number;

#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<Number>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Push a value onto the top
    pub fn push(&mut self, value: Number) {
        self.items.push(value);
    }

    /// Remove and return the top value, `None` when empty
    pub fn pop(&mut self) -> Option<Number> {
        self.items.pop()
    }

    /// The top value without removing it
    pub fn peek(&self) -> Option<Number> {
        self.items.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Values from bottom to top
    pub fn to_vec(&self) -> Vec<Number> {
        self.items.clone()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
