//! Binary search tree operations
//!
//! Every descent records one `Visit` per node on the search path, with the
//! comparison that decided the direction as its note.

use super::unsupported;
use crate::command::{Command, StructureKind};
use crate::engine::errors::{CommandError, OpError};
use crate::engine::session::Session;
use crate::structures::{bst::DeleteCase, Number};
use crate::trace::{Locator, Outcome, Output, StepKind, Trace, TraceBuilder};
use std::cmp::Ordering;

/// Which traversal order to emit
#[derive(Debug, Clone, Copy)]
enum Order {
    In,
    Pre,
    Post,
}

impl Session {
    pub(crate) fn run_tree_command(&mut self, command: &Command) -> Result<Trace, CommandError> {
        let trace = match command {
            Command::Insert(value) => self.tree_insert(*value),
            Command::Delete(value) => self.tree_delete(*value),
            Command::Search(value) => self.tree_search(*value),
            Command::InOrder => self.tree_traverse(Order::In),
            Command::PreOrder => self.tree_traverse(Order::Pre),
            Command::PostOrder => self.tree_traverse(Order::Post),
            Command::Clear => {
                let mut builder = TraceBuilder::new("Clearing the tree", &self.tree);
                let count = self.tree.node_count();
                self.tree.clear();
                builder.apply(StepKind::Delete, "", Locator::None, format!("removed {} nodes", count));
                builder.finish(&self.tree, Outcome::ok(), Output::None)
            }
            other => return Err(unsupported(other, StructureKind::Tree)),
        };
        Ok(trace)
    }

    fn tree_insert(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Inserting {} into the tree", value), &self.tree);

        // A full tree is rejected before any comparison
        if !self.tree.is_full() {
            self.tree_descend(&mut builder, value);
        }
        let parent = self.tree.find_path_values(value).last().copied();

        let result = self.tree.insert(value);
        match &result {
            Ok(_) => {
                let note = match parent {
                    Some(p) if value < p => format!("attach {} as the left child of {}", value, p),
                    Some(p) => format!("attach {} as the right child of {}", value, p),
                    None => format!("{} becomes the root", value),
                };
                builder.apply(StepKind::Insert, value.to_string(), Locator::Node(value), note);
            }
            Err(error) => {
                let locator = match error {
                    OpError::DuplicateValue(_) => Locator::Node(value),
                    _ => Locator::None,
                };
                builder.step(StepKind::Rejected, value.to_string(), locator, error.to_string());
            }
        }
        builder.finish(&self.tree, Outcome::from(&result), Output::None)
    }

    fn tree_delete(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Deleting {} from the tree", value), &self.tree);
        if !self.tree_descend(&mut builder, value) {
            let error = OpError::NotFound(value.to_string());
            builder.step(
                StepKind::NotFound,
                value.to_string(),
                Locator::None,
                format!("{} is not in the tree", value),
            );
            return builder.finish(&self.tree, Outcome::failed(&error), Output::Absent);
        }

        let result = self.tree.delete(value);
        match &result {
            Ok(DeleteCase::Leaf) => {
                builder.remove(
                    StepKind::Delete,
                    value.to_string(),
                    Locator::Node(value),
                    format!("{} is a leaf, detach it", value),
                );
            }
            Ok(DeleteCase::OneChild) => {
                builder.remove(
                    StepKind::Delete,
                    value.to_string(),
                    Locator::Node(value),
                    format!("{} has one child, which takes its place", value),
                );
            }
            Ok(DeleteCase::TwoChildren { successor }) => {
                builder.step(
                    StepKind::Found,
                    successor.to_string(),
                    Locator::Node(*successor),
                    format!("in-order successor of {} is {}", value, successor),
                );
                builder.remove(
                    StepKind::Delete,
                    value.to_string(),
                    Locator::Node(value),
                    format!(
                        "{} has two children, copy {} up and remove the successor's old node",
                        value, successor
                    ),
                );
            }
            Err(error) => {
                builder.step(StepKind::NotFound, value.to_string(), Locator::None, error.to_string());
            }
        }
        let output = if result.is_ok() {
            Output::Value(value)
        } else {
            Output::Absent
        };
        builder.finish(&self.tree, Outcome::from(&result), output)
    }

    fn tree_search(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Searching the tree for {}", value), &self.tree);
        if self.tree_descend(&mut builder, value) {
            builder.step(
                StepKind::Found,
                value.to_string(),
                Locator::Node(value),
                format!("found {}", value),
            );
            builder.finish(&self.tree, Outcome::ok(), Output::Value(value))
        } else {
            let error = OpError::NotFound(value.to_string());
            builder.step(
                StepKind::NotFound,
                value.to_string(),
                Locator::None,
                format!("ran out of nodes, {} is not in the tree", value),
            );
            builder.finish(&self.tree, Outcome::failed(&error), Output::Absent)
        }
    }

    fn tree_traverse(&mut self, order: Order) -> Trace {
        let (name, values) = match order {
            Order::In => ("in-order", self.tree.in_order()),
            Order::Pre => ("pre-order", self.tree.pre_order()),
            Order::Post => ("post-order", self.tree.post_order()),
        };
        let mut builder = TraceBuilder::new(format!("Traversing the tree {}", name), &self.tree);
        for (i, value) in values.iter().enumerate() {
            builder.step(
                StepKind::Emit,
                value.to_string(),
                Locator::Node(*value),
                format!("#{}: {}", i + 1, value),
            );
        }
        builder.finish(&self.tree, Outcome::ok(), Output::Values(values))
    }

    /// Record a `Visit` for each node on the path toward `value`.
    /// Returns whether the path ended on `value`.
    fn tree_descend(&self, builder: &mut TraceBuilder, value: Number) -> bool {
        let path = self.tree.find_path_values(value);
        for node in &path {
            let note = match value.cmp(node) {
                Ordering::Less => format!("{} < {}, go left", value, node),
                Ordering::Greater => format!("{} > {}, go right", value, node),
                Ordering::Equal => format!("{} == {}", value, node),
            };
            builder.step(StepKind::Visit, node.to_string(), Locator::Node(*node), note);
        }
        path.last() == Some(&value)
    }
}
