//! Graph operations

use super::unsupported;
use crate::command::{Command, StructureKind};
use crate::engine::errors::{CommandError, OpError};
use crate::engine::session::Session;
use crate::trace::{Locator, Outcome, Output, StepKind, Trace, TraceBuilder};

impl Session {
    pub(crate) fn run_graph_command(&mut self, command: &Command) -> Result<Trace, CommandError> {
        let trace = match command {
            Command::AddVertex(id) => self.graph_add_vertex(id),
            Command::AddEdge(a, b) => self.graph_add_edge(a, b),
            Command::RemoveVertex(id) => self.graph_remove_vertex(id),
            Command::RemoveEdge(a, b) => self.graph_remove_edge(a, b),
            Command::DepthFirst(start) => self.graph_traverse(start, true),
            Command::BreadthFirst(start) => self.graph_traverse(start, false),
            Command::Clear => {
                let mut builder = TraceBuilder::new("Clearing the graph", &self.graph);
                let count = self.graph.vertex_count();
                self.graph.clear();
                builder.apply(StepKind::Delete, "", Locator::None, format!("removed {} vertices", count));
                builder.finish(&self.graph, Outcome::ok(), Output::None)
            }
            other => return Err(unsupported(other, StructureKind::Graph)),
        };
        Ok(trace)
    }

    fn graph_add_vertex(&mut self, id: &str) -> Trace {
        let mut builder = TraceBuilder::new(format!("Adding vertex {}", id), &self.graph);
        if self.graph.add_vertex(id) {
            builder.apply(
                StepKind::Insert,
                id,
                Locator::Vertex(id.to_string()),
                format!("add vertex {}", id),
            );
        } else {
            builder.step(
                StepKind::Found,
                id,
                Locator::Vertex(id.to_string()),
                format!("vertex {} already exists", id),
            );
        }
        builder.finish(&self.graph, Outcome::ok(), Output::None)
    }

    fn graph_add_edge(&mut self, a: &str, b: &str) -> Trace {
        let mut builder = TraceBuilder::new(format!("Adding edge {} - {}", a, b), &self.graph);
        if a == b {
            let error = OpError::SelfLoop(a.to_string());
            builder.step(
                StepKind::Rejected,
                a,
                Locator::Vertex(a.to_string()),
                error.to_string(),
            );
            return builder.finish(&self.graph, Outcome::failed(&error), Output::None);
        }

        for id in [a, b] {
            if !self.graph.has_vertex(id) {
                builder.step(
                    StepKind::Insert,
                    id,
                    Locator::Vertex(id.to_string()),
                    format!("create missing vertex {}", id),
                );
            }
        }

        let edge = Locator::Edge(a.to_string(), b.to_string());
        let result = self.graph.add_edge(a, b);
        match &result {
            // Both endpoints and the edge appear together
            Ok(true) => {
                builder.apply(
                    StepKind::Insert,
                    format!("{}-{}", a, b),
                    edge,
                    format!("connect {} and {}", a, b),
                );
            }
            Ok(false) => {
                builder.step(
                    StepKind::Found,
                    format!("{}-{}", a, b),
                    edge,
                    format!("{} and {} are already connected", a, b),
                );
            }
            Err(error) => {
                builder.step(StepKind::Rejected, a, Locator::None, error.to_string());
            }
        }
        builder.finish(&self.graph, Outcome::from(&result), Output::None)
    }

    fn graph_remove_edge(&mut self, a: &str, b: &str) -> Trace {
        let mut builder = TraceBuilder::new(format!("Removing edge {} - {}", a, b), &self.graph);
        let edge = Locator::Edge(a.to_string(), b.to_string());
        if self.graph.remove_edge(a, b) {
            builder.remove(
                StepKind::Delete,
                format!("{}-{}", a, b),
                edge,
                format!("disconnect {} and {}", a, b),
            );
            builder.finish(&self.graph, Outcome::ok(), Output::None)
        } else {
            let error = OpError::NotFound(format!("edge {}-{}", a, b));
            builder.step(StepKind::NotFound, format!("{}-{}", a, b), Locator::None, error.to_string());
            builder.finish(&self.graph, Outcome::failed(&error), Output::None)
        }
    }

    fn graph_remove_vertex(&mut self, id: &str) -> Trace {
        let mut builder = TraceBuilder::new(format!("Removing vertex {}", id), &self.graph);
        if !self.graph.has_vertex(id) {
            let error = OpError::NotFound(format!("vertex {}", id));
            builder.step(StepKind::NotFound, id, Locator::None, error.to_string());
            return builder.finish(&self.graph, Outcome::failed(&error), Output::None);
        }

        for neighbor in self.graph.neighbors(id) {
            builder.step(
                StepKind::Delete,
                format!("{}-{}", id, neighbor),
                Locator::Edge(id.to_string(), neighbor.clone()),
                format!("drop edge {} - {}", id, neighbor),
            );
        }
        builder.remove(
            StepKind::Delete,
            id,
            Locator::Vertex(id.to_string()),
            format!("remove vertex {}", id),
        );
        self.graph.remove_vertex(id);
        builder.finish(&self.graph, Outcome::ok(), Output::None)
    }

    fn graph_traverse(&mut self, start: &str, depth_first: bool) -> Trace {
        let (name, order) = if depth_first {
            ("Depth-first", self.graph.depth_first(start))
        } else {
            ("Breadth-first", self.graph.breadth_first(start))
        };
        let mut builder =
            TraceBuilder::new(format!("{} traversal from {}", name, start), &self.graph);

        if order.is_empty() {
            // Unknown start: an empty visit order, reported as not found
            let error = OpError::NotFound(format!("vertex {}", start));
            builder.step(StepKind::NotFound, start, Locator::None, error.to_string());
            return builder.finish(
                &self.graph,
                Outcome::failed(&error),
                Output::Vertices(Vec::new()),
            );
        }

        for (i, vertex) in order.iter().enumerate() {
            builder.step(
                StepKind::Visit,
                vertex.as_str(),
                Locator::Vertex(vertex.clone()),
                format!("#{}: visit {}", i + 1, vertex),
            );
        }
        builder.finish(&self.graph, Outcome::ok(), Output::Vertices(order))
    }
}
