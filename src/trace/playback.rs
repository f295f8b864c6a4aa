//! Step-by-step replay of a [`Trace`]
//!
//! A [`Playback`] owns one trace and a cursor counting how many steps have
//! been revealed. Steps are consumed strictly in order; the only way past the
//! remaining steps is [`Playback::run_to_end`], which consumes them all.
//! Dropping a playback at any point has no effect on the structure the trace
//! came from.

use super::{Locator, Snapshot, Step, Trace};

#[derive(Debug, Clone)]
pub struct Playback {
    trace: Trace,
    cursor: usize,
}

impl Playback {
    pub fn new(trace: Trace) -> Self {
        Playback { trace, cursor: 0 }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Number of steps revealed so far
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Reveal the next step
    pub fn advance(&mut self) -> Option<&Step> {
        if self.cursor >= self.trace.len() {
            return None;
        }
        self.cursor += 1;
        self.trace.steps().get(self.cursor - 1)
    }

    /// Hide the most recently revealed step. Returns `false` at the start.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Return to the beginning; the next `advance` yields the first step again
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Consume every remaining step, returning how many were consumed
    pub fn run_to_end(&mut self) -> usize {
        let remaining = self.trace.len() - self.cursor;
        self.cursor = self.trace.len();
        remaining
    }

    /// The most recently revealed step
    pub fn current(&self) -> Option<&Step> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.trace.steps().get(i))
    }

    /// Where the renderer should draw its highlight
    pub fn highlight(&self) -> Option<&Locator> {
        self.current()
            .map(|s| &s.locator)
            .filter(|l| **l != Locator::None)
    }

    /// Steps revealed so far, oldest first
    pub fn revealed(&self) -> &[Step] {
        &self.trace.steps()[..self.cursor]
    }

    /// True once the `Done` marker has been revealed
    pub fn is_done(&self) -> bool {
        self.cursor >= self.trace.len()
    }

    /// The structure state matching the current cursor
    pub fn visible_snapshot(&self) -> &Snapshot {
        match self.trace.applied_at() {
            Some(at) if self.cursor <= at => self.trace.before(),
            _ => self.trace.after(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::stack::Stack;
    use crate::trace::{Output, Outcome, StepKind, TraceBuilder};

    fn push_trace() -> Trace {
        let mut stack = Stack::new();
        let mut builder = TraceBuilder::new("Pushing 7 onto the stack", &stack);
        stack.push(7);
        builder.apply(StepKind::Insert, "7", Locator::Position(0), "push 7");
        builder.finish(&stack, Outcome::ok(), Output::None)
    }

    #[test]
    fn test_advance_in_order_until_done() {
        let mut playback = Playback::new(push_trace());
        assert_eq!(playback.advance().map(|s| s.kind), Some(StepKind::Start));
        assert_eq!(playback.advance().map(|s| s.kind), Some(StepKind::Insert));
        assert!(!playback.is_done());
        assert_eq!(playback.advance().map(|s| s.kind), Some(StepKind::Done));
        assert!(playback.is_done());
        assert!(playback.advance().is_none());
    }

    #[test]
    fn test_rewind_replays_identical_steps() {
        let mut playback = Playback::new(push_trace());
        let mut first = Vec::new();
        while let Some(step) = playback.advance() {
            first.push(step.clone());
        }
        playback.rewind();
        let mut second = Vec::new();
        while let Some(step) = playback.advance() {
            second.push(step.clone());
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_visible_snapshot_switches_at_applied_step() {
        let mut playback = Playback::new(push_trace());
        assert_eq!(playback.visible_snapshot(), &Snapshot::Stack { values: vec![] });
        playback.advance();
        assert_eq!(playback.visible_snapshot(), &Snapshot::Stack { values: vec![] });
        playback.advance();
        assert_eq!(playback.visible_snapshot(), &Snapshot::Stack { values: vec![7] });
        playback.back();
        assert_eq!(playback.visible_snapshot(), &Snapshot::Stack { values: vec![] });
    }

    #[test]
    fn test_removal_switches_after_its_step() {
        let mut stack = Stack::new();
        stack.push(7);
        let mut builder = TraceBuilder::new("Popping from the stack", &stack);
        stack.pop();
        builder.remove(StepKind::Delete, "7", Locator::Position(0), "pop 7");
        let trace = builder.finish(&stack, Outcome::ok(), Output::Value(7));
        assert_eq!(trace.applied_at(), Some(2));

        let mut playback = Playback::new(trace);
        playback.advance();
        playback.advance();
        assert_eq!(playback.highlight(), Some(&Locator::Position(0)));
        assert_eq!(playback.visible_snapshot(), &Snapshot::Stack { values: vec![7] });
        playback.advance();
        assert_eq!(playback.visible_snapshot(), &Snapshot::Stack { values: vec![] });
    }

    #[test]
    fn test_run_to_end_and_back() {
        let mut playback = Playback::new(push_trace());
        playback.advance();
        assert_eq!(playback.run_to_end(), 2);
        assert!(playback.is_done());
        assert!(playback.back());
        assert_eq!(playback.current().map(|s| s.kind), Some(StepKind::Insert));
        playback.rewind();
        assert!(!playback.back());
        assert!(playback.current().is_none());
    }
}
