//! Linked list operations

use super::unsupported;
use crate::command::{Command, StructureKind};
use crate::engine::errors::{CommandError, OpError};
use crate::engine::session::Session;
use crate::structures::Number;
use crate::trace::{Locator, Outcome, Output, StepKind, Trace, TraceBuilder};

impl Session {
    pub(crate) fn run_list_command(&mut self, command: &Command) -> Result<Trace, CommandError> {
        let trace = match command {
            Command::InsertHead(value) => self.list_insert_head(*value),
            Command::InsertTail(value) => self.list_insert_tail(*value),
            Command::InsertAt { value, position } => self.list_insert_at(*value, *position),
            Command::Delete(value) => self.list_delete(*value),
            Command::Search(value) => self.list_search(*value),
            Command::Clear => self.list_clear(),
            other => return Err(unsupported(other, StructureKind::LinkedList)),
        };
        Ok(trace)
    }

    fn list_insert_head(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Inserting {} at the head", value), &self.list);
        let note = match self.list.head() {
            Some(head) => format!("new node {} points at old head {}", value, head.value),
            None => format!("{} becomes the only node", value),
        };
        self.list.insert_at_head(value);
        builder.apply(StepKind::Insert, value.to_string(), Locator::Position(0), note);
        builder.finish(&self.list, Outcome::ok(), Output::Position(0))
    }

    fn list_insert_tail(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Inserting {} at the tail", value), &self.list);
        for (i, node) in self.list.iter().enumerate() {
            builder.step(
                StepKind::Visit,
                node.to_string(),
                Locator::Position(i),
                format!("walk past node {}", i),
            );
        }
        let position = self.list.len();
        self.list.insert_at_tail(value);
        let note = if position == 0 {
            format!("{} becomes the only node", value)
        } else {
            format!("link {} after the old tail", value)
        };
        builder.apply(StepKind::Insert, value.to_string(), Locator::Position(position), note);
        builder.finish(&self.list, Outcome::ok(), Output::Position(position))
    }

    fn list_insert_at(&mut self, value: Number, position: usize) -> Trace {
        let mut builder = TraceBuilder::new(
            format!("Inserting {} at position {}", value, position),
            &self.list,
        );
        let target = position.min(self.list.len());
        if target != position {
            builder.step(
                StepKind::Compare,
                position.to_string(),
                Locator::None,
                format!(
                    "position {} is past the end, inserting at the tail ({})",
                    position, target
                ),
            );
        }
        // Walk to the predecessor
        for (i, node) in self.list.iter().take(target).enumerate() {
            builder.step(
                StepKind::Visit,
                node.to_string(),
                Locator::Position(i),
                format!("walk past node {}", i),
            );
        }
        let landed = self.list.insert_at_position(value, target);
        builder.apply(
            StepKind::Insert,
            value.to_string(),
            Locator::Position(landed),
            format!("link {} in at position {}", value, landed),
        );
        builder.finish(&self.list, Outcome::ok(), Output::Position(landed))
    }

    fn list_delete(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Deleting {}", value), &self.list);
        let found = self.list_scan(&mut builder, value);

        match found {
            Some(position) => {
                self.list.delete(value);
                builder.remove(
                    StepKind::Delete,
                    value.to_string(),
                    Locator::Position(position),
                    format!("unlink node {}", position),
                );
                builder.finish(&self.list, Outcome::ok(), Output::Position(position))
            }
            None => {
                let error = OpError::NotFound(value.to_string());
                builder.step(
                    StepKind::NotFound,
                    value.to_string(),
                    Locator::None,
                    format!("{} is not in the list", value),
                );
                builder.finish(&self.list, Outcome::failed(&error), Output::Absent)
            }
        }
    }

    fn list_search(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Searching for {}", value), &self.list);
        match self.list_scan(&mut builder, value) {
            Some(position) => {
                builder.step(
                    StepKind::Found,
                    value.to_string(),
                    Locator::Position(position),
                    format!("found {} at position {}", value, position),
                );
                builder.finish(&self.list, Outcome::ok(), Output::Position(position))
            }
            None => {
                let error = OpError::NotFound(value.to_string());
                builder.step(
                    StepKind::NotFound,
                    value.to_string(),
                    Locator::None,
                    format!("reached the end without finding {}", value),
                );
                builder.finish(&self.list, Outcome::failed(&error), Output::Absent)
            }
        }
    }

    fn list_clear(&mut self) -> Trace {
        let mut builder = TraceBuilder::new("Clearing the list", &self.list);
        let count = self.list.len();
        self.list.clear();
        builder.apply(
            StepKind::Delete,
            "",
            Locator::None,
            format!("removed {} nodes", count),
        );
        builder.finish(&self.list, Outcome::ok(), Output::None)
    }

    /// Compare nodes from the head until `value` matches, recording each one
    fn list_scan(&self, builder: &mut TraceBuilder, value: Number) -> Option<usize> {
        for (i, node) in self.list.iter().enumerate() {
            let matched = node == value;
            builder.step(
                StepKind::Compare,
                node.to_string(),
                Locator::Position(i),
                format!("{} {} {}", node, if matched { "==" } else { "!=" }, value),
            );
            if matched {
                return Some(i);
            }
        }
        None
    }
}
