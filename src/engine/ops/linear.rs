//! Stack and queue operations

use super::unsupported;
use crate::command::{Command, StructureKind};
use crate::engine::errors::{CommandError, OpError};
use crate::engine::session::Session;
use crate::structures::Number;
use crate::trace::{Locator, Outcome, Output, StepKind, Trace, TraceBuilder};

impl Session {
    pub(crate) fn run_stack_command(&mut self, command: &Command) -> Result<Trace, CommandError> {
        let trace = match command {
            Command::Push(value) => self.stack_push(*value),
            Command::Pop => self.stack_pop(),
            Command::Peek => self.stack_peek(),
            Command::Clear => {
                let mut builder = TraceBuilder::new("Clearing the stack", &self.stack);
                let count = self.stack.size();
                self.stack.clear();
                builder.apply(StepKind::Delete, "", Locator::None, format!("removed {} items", count));
                builder.finish(&self.stack, Outcome::ok(), Output::None)
            }
            other => return Err(unsupported(other, StructureKind::Stack)),
        };
        Ok(trace)
    }

    pub(crate) fn run_queue_command(&mut self, command: &Command) -> Result<Trace, CommandError> {
        let trace = match command {
            Command::Enqueue(value) => self.queue_enqueue(*value),
            Command::Dequeue => self.queue_dequeue(),
            Command::Peek => self.queue_peek(),
            Command::Clear => {
                let mut builder = TraceBuilder::new("Clearing the queue", &self.queue);
                let count = self.queue.size();
                self.queue.clear();
                builder.apply(StepKind::Delete, "", Locator::None, format!("removed {} items", count));
                builder.finish(&self.queue, Outcome::ok(), Output::None)
            }
            other => return Err(unsupported(other, StructureKind::Queue)),
        };
        Ok(trace)
    }

    fn stack_push(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Pushing {} onto the stack", value), &self.stack);
        let top = self.stack.size();
        self.stack.push(value);
        builder.apply(
            StepKind::Insert,
            value.to_string(),
            Locator::Position(top),
            format!("{} is the new top", value),
        );
        builder.finish(&self.stack, Outcome::ok(), Output::None)
    }

    fn stack_pop(&mut self) -> Trace {
        let mut builder = TraceBuilder::new("Popping from the stack", &self.stack);
        let Some(value) = self.stack.peek() else {
            return rejected_empty(builder, "stack", &self.stack);
        };
        let top = self.stack.size() - 1;
        builder.step(
            StepKind::Visit,
            value.to_string(),
            Locator::Position(top),
            format!("top of the stack is {}", value),
        );
        self.stack.pop();
        builder.remove(
            StepKind::Delete,
            value.to_string(),
            Locator::Position(top),
            format!("pop {}", value),
        );
        builder.finish(&self.stack, Outcome::ok(), Output::Value(value))
    }

    fn stack_peek(&mut self) -> Trace {
        let builder = TraceBuilder::new("Peeking at the stack", &self.stack);
        match self.stack.peek() {
            Some(value) => {
                let top = self.stack.size() - 1;
                found_at(builder, value, top, "top", &self.stack)
            }
            None => rejected_empty(builder, "stack", &self.stack),
        }
    }

    fn queue_enqueue(&mut self, value: Number) -> Trace {
        let mut builder = TraceBuilder::new(format!("Enqueuing {}", value), &self.queue);
        let rear = self.queue.size();
        self.queue.enqueue(value);
        builder.apply(
            StepKind::Insert,
            value.to_string(),
            Locator::Position(rear),
            format!("{} joins the rear", value),
        );
        builder.finish(&self.queue, Outcome::ok(), Output::None)
    }

    fn queue_dequeue(&mut self) -> Trace {
        let mut builder = TraceBuilder::new("Dequeuing", &self.queue);
        let Some(value) = self.queue.peek() else {
            return rejected_empty(builder, "queue", &self.queue);
        };
        builder.step(
            StepKind::Visit,
            value.to_string(),
            Locator::Position(0),
            format!("front of the queue is {}", value),
        );
        self.queue.dequeue();
        builder.remove(
            StepKind::Delete,
            value.to_string(),
            Locator::Position(0),
            format!("dequeue {}", value),
        );
        builder.finish(&self.queue, Outcome::ok(), Output::Value(value))
    }

    fn queue_peek(&mut self) -> Trace {
        let builder = TraceBuilder::new("Peeking at the queue", &self.queue);
        match self.queue.peek() {
            Some(value) => found_at(builder, value, 0, "front", &self.queue),
            None => rejected_empty(builder, "queue", &self.queue),
        }
    }
}

fn found_at<S: crate::trace::Snapshotable>(
    mut builder: TraceBuilder,
    value: Number,
    position: usize,
    end: &str,
    structure: &S,
) -> Trace {
    builder.step(
        StepKind::Found,
        value.to_string(),
        Locator::Position(position),
        format!("{} is at the {}", value, end),
    );
    builder.finish(structure, Outcome::ok(), Output::Value(value))
}

fn rejected_empty<S: crate::trace::Snapshotable>(
    mut builder: TraceBuilder,
    name: &'static str,
    structure: &S,
) -> Trace {
    let error = OpError::Empty(name);
    builder.step(StepKind::Rejected, "", Locator::None, error.to_string());
    builder.finish(structure, Outcome::failed(&error), Output::Absent)
}
