//! Undirected graph
//!
//! Vertices are string ids. Each vertex owns an ordered neighbor list; the
//! relation is kept symmetric by every mutation and never contains
//! self-loops or repeated neighbors. Vertex order is insertion order, and
//! traversals explore neighbors in list order, so every query is
//! deterministic.

use super::OpError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: FxHashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            adjacency: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Add a vertex if it is not already present.
    ///
    /// Returns `true` when a vertex was created.
    pub fn add_vertex(&mut self, id: &str) -> bool {
        if self.adjacency.contains_key(id) {
            return false;
        }
        self.adjacency.insert(id.to_string(), Vec::new());
        self.order.push(id.to_string());
        true
    }

    /// Connect `a` and `b`, creating either vertex if needed.
    ///
    /// Returns `Ok(true)` when a new edge was created and `Ok(false)` when it
    /// already existed. A self-loop is rejected before any vertex is created.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<bool, OpError> {
        if a == b {
            return Err(OpError::SelfLoop(a.to_string()));
        }
        self.add_vertex(a);
        self.add_vertex(b);
        if self.has_edge(a, b) {
            return Ok(false);
        }
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.push(b.to_string());
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.push(a.to_string());
        }
        Ok(true)
    }

    /// Disconnect `a` and `b`. Returns `true` when an edge was removed.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let mut removed = false;
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            let before = neighbors.len();
            neighbors.retain(|n| n != b);
            removed |= neighbors.len() != before;
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            let before = neighbors.len();
            neighbors.retain(|n| n != a);
            removed |= neighbors.len() != before;
        }
        removed
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Returns the neighbors it was disconnected from, or `None` if the vertex
    /// did not exist.
    pub fn remove_vertex(&mut self, id: &str) -> Option<Vec<String>> {
        let neighbors = self.adjacency.get(id)?.clone();
        for neighbor in &neighbors {
            self.remove_edge(id, neighbor);
        }
        self.adjacency.remove(id);
        self.order.retain(|v| v != id);
        Some(neighbors)
    }

    pub fn has_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.iter().any(|n| n == b))
    }

    /// Neighbors of `id` in list order (empty for unknown vertices)
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertex ids in insertion order
    pub fn vertices(&self) -> &[String] {
        &self.order
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Every edge exactly once, as it is first met walking vertices in order.
    ///
    /// Deduplication uses the sorted pair as key, so `(a, b)` and `(b, a)`
    /// collapse regardless of which endpoint is seen first.
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        let mut edges = Vec::new();
        for vertex in &self.order {
            for neighbor in self.neighbors(vertex) {
                let key = if vertex.as_str() <= neighbor.as_str() {
                    (vertex.as_str(), neighbor.as_str())
                } else {
                    (neighbor.as_str(), vertex.as_str())
                };
                if seen.insert(key) {
                    edges.push((vertex.clone(), neighbor.clone()));
                }
            }
        }
        edges
    }

    /// Depth-first visit order from `start`.
    ///
    /// Matches the recursive walk that descends into each unvisited neighbor
    /// in list order. Unknown start vertices yield an empty order.
    pub fn depth_first(&self, start: &str) -> Vec<String> {
        if !self.has_vertex(start) {
            return Vec::new();
        }
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut result = Vec::new();
        // Each frame is a vertex and the index of the next neighbor to try
        let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
        visited.insert(start);
        result.push(start.to_string());

        while let Some(frame) = stack.last_mut() {
            let (vertex, next) = *frame;
            frame.1 += 1;
            match self.neighbors(vertex).get(next) {
                None => {
                    stack.pop();
                }
                Some(neighbor) => {
                    if visited.insert(neighbor.as_str()) {
                        result.push(neighbor.clone());
                        stack.push((neighbor.as_str(), 0));
                    }
                }
            }
        }
        result
    }

    /// Breadth-first visit order from `start`.
    ///
    /// Vertices are marked when enqueued so none is queued twice. Unknown
    /// start vertices yield an empty order.
    pub fn breadth_first(&self, start: &str) -> Vec<String> {
        if !self.has_vertex(start) {
            return Vec::new();
        }
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut result = Vec::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            result.push(vertex.to_string());
            for neighbor in self.neighbors(vertex) {
                if visited.insert(neighbor.as_str()) {
                    queue.push_back(neighbor.as_str());
                }
            }
        }
        result
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.order.clear();
    }
}
