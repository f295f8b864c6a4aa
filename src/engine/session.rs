// Session: owns one instance of every structure and the in-flight playback

use super::config::EngineConfig;
use super::errors::{CommandError, ConfigError};
use crate::command::{parse_command, Command, StructureKind};
use crate::structures::{
    bst::BinarySearchTree, graph::Graph, hash_table::HashTable, linked_list::LinkedList,
    queue::Queue, stack::Stack,
};
use crate::trace::{Playback, Snapshot, Snapshotable, Trace};
use tracing::{debug, info, warn};

/// A single user's workspace.
///
/// Commands are applied one at a time. Each command mutates its structure
/// synchronously and produces a fresh [`Trace`]; the trace is installed as
/// the session's only [`Playback`], replacing (and discarding) whatever was
/// playing before. Because the mutation happens before the trace exists,
/// dropping a playback part-way through always leaves the structure in the
/// state of the last completed command.
pub struct Session {
    config: EngineConfig,

    pub(super) list: LinkedList,
    pub(super) stack: Stack,
    pub(super) queue: Queue,
    pub(super) tree: BinarySearchTree,
    pub(super) table: HashTable<String>,
    pub(super) graph: Graph,

    /// The trace currently being replayed and the structure it belongs to
    playback: Option<(StructureKind, Playback)>,

    /// Number of commands executed so far
    executed: usize,
}

impl Session {
    /// Create a session with empty structures sized by `config`
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Session {
            list: LinkedList::new(),
            stack: Stack::new(),
            queue: Queue::new(),
            tree: BinarySearchTree::new(config.max_nodes),
            table: HashTable::new(config.bucket_count),
            graph: Graph::new(),
            playback: None,
            executed: 0,
            config,
        })
    }

    /// Parse `line` for `kind` and execute it
    pub fn execute_line(
        &mut self,
        kind: StructureKind,
        line: &str,
    ) -> Result<&mut Playback, CommandError> {
        let command = parse_command(kind, line)?;
        self.execute(kind, &command)
    }

    /// Run `command` against the `kind` structure and start replaying its trace
    pub fn execute(
        &mut self,
        kind: StructureKind,
        command: &Command,
    ) -> Result<&mut Playback, CommandError> {
        // Validate before discarding anything, so a rejected command leaves
        // the current playback alone
        let trace = self.run(kind, command)?;
        self.cancel();

        self.executed += 1;
        info!(
            structure = %kind,
            title = trace.title(),
            success = trace.outcome().success,
            reason = trace.outcome().reason.unwrap_or(""),
            steps = trace.len(),
            "operation traced"
        );

        if trace.outcome().reason == Some("capacity") {
            warn!(structure = %kind, limit = self.config.max_nodes, "tree is full");
        }
        if *command == Command::Clear {
            info!(structure = %kind, "structure reset");
        }

        let (_, playback) = self.playback.insert((kind, Playback::new(trace)));
        Ok(playback)
    }

    fn run(&mut self, kind: StructureKind, command: &Command) -> Result<Trace, CommandError> {
        match kind {
            StructureKind::LinkedList => self.run_list_command(command),
            StructureKind::Stack => self.run_stack_command(command),
            StructureKind::Queue => self.run_queue_command(command),
            StructureKind::Tree => self.run_tree_command(command),
            StructureKind::HashTable => self.run_table_command(command),
            StructureKind::Graph => self.run_graph_command(command),
        }
    }

    /// Discard the in-flight playback, if any. Returns `true` if one was dropped.
    pub fn cancel(&mut self) -> bool {
        match self.playback.take() {
            Some((kind, playback)) => {
                if !playback.is_done() {
                    debug!(
                        structure = %kind,
                        title = playback.trace().title(),
                        position = playback.position(),
                        total = playback.total_steps(),
                        "discarding in-flight trace"
                    );
                }
                true
            }
            None => false,
        }
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref().map(|(_, p)| p)
    }

    pub fn playback_mut(&mut self) -> Option<&mut Playback> {
        self.playback.as_mut().map(|(_, p)| p)
    }

    /// Which structure the in-flight playback belongs to
    pub fn playback_kind(&self) -> Option<StructureKind> {
        self.playback.as_ref().map(|(k, _)| *k)
    }

    /// Playback for `kind`, if the in-flight trace belongs to it
    pub fn playback_for(&self, kind: StructureKind) -> Option<&Playback> {
        self.playback
            .as_ref()
            .filter(|(k, _)| *k == kind)
            .map(|(_, p)| p)
    }

    /// Current state of the `kind` structure, ignoring any playback
    pub fn snapshot(&self, kind: StructureKind) -> Snapshot {
        match kind {
            StructureKind::LinkedList => self.list.snapshot(),
            StructureKind::Stack => self.stack.snapshot(),
            StructureKind::Queue => self.queue.snapshot(),
            StructureKind::Tree => self.tree.snapshot(),
            StructureKind::HashTable => self.table.snapshot(),
            StructureKind::Graph => self.graph.snapshot(),
        }
    }

    /// What a renderer should draw for `kind` right now: the playback's
    /// visible state when a trace for `kind` is in flight, otherwise the
    /// structure itself
    pub fn visible_snapshot(&self, kind: StructureKind) -> Snapshot {
        match self.playback_for(kind) {
            Some(playback) => playback.visible_snapshot().clone(),
            None => self.snapshot(kind),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn executed(&self) -> usize {
        self.executed
    }

    pub fn list(&self) -> &LinkedList {
        &self.list
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    pub fn table(&self) -> &HashTable<String> {
        &self.table
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
