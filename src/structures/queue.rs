//! FIFO queue of numbers

use super::Number;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<Number>,
}

impl Queue {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Add a value at the rear
    pub fn enqueue(&mut self, value: Number) {
        self.items.push_back(value);
    }

    /// Remove and return the front value, `None` when empty
    pub fn dequeue(&mut self) -> Option<Number> {
        self.items.pop_front()
    }

    /// The front value without removing it
    pub fn peek(&self) -> Option<Number> {
        self.items.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Values from front to rear
    pub fn to_vec(&self) -> Vec<Number> {
        self.items.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
