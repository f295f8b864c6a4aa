//! Operation traces
//!
//! Every operation run through a [`Session`](crate::engine::session::Session)
//! produces a [`Trace`]: an ordered, immutable list of [`Step`]s describing
//! what the engine did (hash computed, bucket located, node compared, value
//! inserted, ...), together with the structure's state before and after the
//! operation. A renderer replays the steps one at a time through a
//! [`Playback`](playback::Playback).
//!
//! # Contract with renderers
//!
//! - Steps are in the order the engine performed them.
//! - The first step is always [`StepKind::Start`] and the last is always
//!   [`StepKind::Done`].
//! - `applied_at` is the index of the step at which the structural change
//!   becomes visible. Before that step a renderer draws `before`; from it
//!   onward it draws `after`. Queries leave it unset.
//! - Removal steps locate the removed item in `before`; the change becomes
//!   visible at the step after them.
//! - A trace has no side effects. Replaying it any number of times yields the
//!   same steps.
//!
//! The builder only talks to structures through [`Snapshotable`], so it does
//! not depend on how any engine stores its data.

pub mod playback;
pub mod snapshot;

pub use playback::Playback;
pub use snapshot::{BucketView, Snapshot, Snapshotable, TreeNodeView, TreeView};

use crate::structures::{Number, OpError};
use serde::Serialize;

/// What a step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Start,
    HashComputed,
    BucketLocated,
    Visit,
    Compare,
    Found,
    NotFound,
    Insert,
    Update,
    Delete,
    Rejected,
    Emit,
    Done,
}

/// Where in the structure a step happens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "at", rename_all = "snake_case")]
pub enum Locator {
    None,
    /// Index into a list, stack or queue (0 is head, bottom or front)
    Position(usize),
    /// Tree node, identified by its value
    Node(Number),
    /// Hash bucket, and the slot in its chain when one is involved
    Bucket { index: usize, slot: Option<usize> },
    Vertex(String),
    Edge(String, String),
}

/// One discrete sub-action of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    /// The value, key or vertex the step is about
    pub subject: String,
    pub locator: Locator,
    /// Human-readable explanation
    pub note: String,
}

/// `{success, reason}` result of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    pub fn ok() -> Self {
        Outcome {
            success: true,
            reason: None,
            message: None,
        }
    }

    pub fn failed(error: &OpError) -> Self {
        Outcome {
            success: false,
            reason: Some(error.reason()),
            message: Some(error.to_string()),
        }
    }
}

impl<T> From<&Result<T, OpError>> for Outcome {
    fn from(result: &Result<T, OpError>) -> Self {
        match result {
            Ok(_) => Outcome::ok(),
            Err(e) => Outcome::failed(e),
        }
    }
}

/// The value an operation hands back to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// The operation has no return value
    None,
    /// A query found nothing
    Absent,
    Value(Number),
    Position(usize),
    Bucket(usize),
    Text(String),
    Flag(bool),
    Values(Vec<Number>),
    Vertices(Vec<String>),
}

/// Immutable record of one operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    title: String,
    steps: Vec<Step>,
    outcome: Outcome,
    output: Output,
    before: Snapshot,
    after: Snapshot,
    applied_at: Option<usize>,
}

impl Trace {
    /// Description of the operation ("Inserting 42 into the tree")
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    pub fn after(&self) -> &Snapshot {
        &self.after
    }

    /// Index of the step that applies the structural change
    pub fn applied_at(&self) -> Option<usize> {
        self.applied_at
    }

    /// Steps of the given kind, in order
    pub fn steps_of(&self, kind: StepKind) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.kind == kind)
    }

    /// Kinds of all steps, in order
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|s| s.kind).collect()
    }
}

/// Accumulates steps for one operation and seals them into a [`Trace`]
#[derive(Debug)]
pub struct TraceBuilder {
    title: String,
    steps: Vec<Step>,
    before: Snapshot,
    applied_at: Option<usize>,
}

impl TraceBuilder {
    /// Start a trace, capturing the structure's current state as `before`
    pub fn new<S: Snapshotable + ?Sized>(title: impl Into<String>, structure: &S) -> Self {
        let title = title.into();
        let mut builder = TraceBuilder {
            steps: Vec::new(),
            before: structure.snapshot(),
            applied_at: None,
            title: title.clone(),
        };
        builder.step(StepKind::Start, "", Locator::None, title);
        builder
    }

    /// Record a step
    pub fn step(
        &mut self,
        kind: StepKind,
        subject: impl Into<String>,
        locator: Locator,
        note: impl Into<String>,
    ) -> &mut Self {
        self.steps.push(Step {
            kind,
            subject: subject.into(),
            locator,
            note: note.into(),
        });
        self
    }

    /// Record the step at which the structural change becomes visible
    pub fn apply(
        &mut self,
        kind: StepKind,
        subject: impl Into<String>,
        locator: Locator,
        note: impl Into<String>,
    ) -> &mut Self {
        self.applied_at = Some(self.steps.len());
        self.step(kind, subject, locator, note)
    }

    /// Record a removal.
    ///
    /// The locator addresses the item in `before`, where it still exists, so
    /// the change only becomes visible at the step recorded after this one
    /// (the `Done` marker unless more steps follow).
    pub fn remove(
        &mut self,
        kind: StepKind,
        subject: impl Into<String>,
        locator: Locator,
        note: impl Into<String>,
    ) -> &mut Self {
        self.applied_at = Some(self.steps.len() + 1);
        self.step(kind, subject, locator, note)
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace with the structure's resulting state and the `Done` marker
    pub fn finish<S: Snapshotable + ?Sized>(
        mut self,
        structure: &S,
        outcome: Outcome,
        output: Output,
    ) -> Trace {
        let note = match &outcome.message {
            Some(message) => message.clone(),
            None if outcome.success => "done".to_string(),
            None => "no change".to_string(),
        };
        self.step(StepKind::Done, "", Locator::None, note);
        Trace {
            title: self.title,
            steps: self.steps,
            outcome,
            output,
            before: self.before,
            after: structure.snapshot(),
            applied_at: self.applied_at,
        }
    }
}
