//! Property tests for structure invariants and trace shape.

use proptest::prelude::*;
use std::collections::BTreeSet;

use structviz::command::{Command, StructureKind};
use structviz::engine::{EngineConfig, Session};
use structviz::structures::bst::BinarySearchTree;
use structviz::structures::graph::Graph;
use structviz::structures::hash_table::HashTable;
use structviz::trace::{Playback, StepKind};

fn tree_ops() -> impl Strategy<Value = Vec<(bool, i64)>> {
    prop::collection::vec((any::<bool>(), -50i64..50), 0..60)
}

proptest! {
    #[test]
    fn prop_bst_in_order_is_sorted_and_unique(ops in tree_ops()) {
        let mut tree = BinarySearchTree::new(1_000);
        let mut model = BTreeSet::new();
        for (insert, value) in ops {
            if insert {
                prop_assert_eq!(tree.insert(value).is_ok(), model.insert(value));
            } else {
                let count = tree.node_count();
                let deleted = tree.delete(value).is_ok();
                prop_assert_eq!(deleted, model.remove(&value));
                if deleted {
                    prop_assert!(tree.search(value).is_none());
                    prop_assert_eq!(tree.node_count(), count - 1);
                } else {
                    prop_assert_eq!(tree.node_count(), count);
                }
            }
        }
        let expected: Vec<i64> = model.into_iter().collect();
        prop_assert_eq!(tree.node_count(), expected.len());
        prop_assert_eq!(tree.in_order(), expected);
    }

    #[test]
    fn prop_bst_never_exceeds_capacity(values in prop::collection::vec(-100i64..100, 0..40), cap in 1usize..10) {
        let mut tree = BinarySearchTree::new(cap);
        for v in values {
            let _ = tree.insert(v);
            prop_assert!(tree.node_count() <= cap);
        }
    }

    #[test]
    fn prop_hash_index_in_range(key in "\\PC{0,12}", buckets in 1usize..64) {
        let table: HashTable = HashTable::new(buckets);
        let index = table.hash(&key);
        prop_assert!(index < buckets);
        prop_assert_eq!(
            index as u64,
            HashTable::<String>::char_code_sum(&key) % buckets as u64
        );
    }

    #[test]
    fn prop_graph_adjacency_is_symmetric(
        edges in prop::collection::vec((0u8..6, 0u8..6), 0..20)
    ) {
        let mut graph = Graph::new();
        for (a, b) in edges {
            let _ = graph.add_edge(&a.to_string(), &b.to_string());
        }
        for vertex in graph.vertices() {
            let neighbors = graph.neighbors(vertex);
            let unique: BTreeSet<&String> = neighbors.iter().collect();
            prop_assert_eq!(unique.len(), neighbors.len());
            prop_assert!(!neighbors.contains(vertex));
            for neighbor in neighbors {
                prop_assert!(graph.neighbors(neighbor).contains(vertex));
            }
        }
        prop_assert_eq!(graph.edges().len(), graph.edge_count());
    }

    #[test]
    fn prop_traversals_visit_each_reachable_vertex_once(
        edges in prop::collection::vec((0u8..8, 0u8..8), 1..20)
    ) {
        let mut graph = Graph::new();
        for (a, b) in &edges {
            let _ = graph.add_edge(&a.to_string(), &b.to_string());
        }
        let Some(start) = graph.vertices().first().cloned() else {
            return Ok(());
        };
        let mut dfs = graph.depth_first(&start);
        let mut bfs = graph.breadth_first(&start);
        prop_assert_eq!(dfs.first(), Some(&start));
        prop_assert_eq!(bfs.first(), Some(&start));
        dfs.sort();
        bfs.sort();
        let before = dfs.len();
        dfs.dedup();
        prop_assert_eq!(before, dfs.len());
        prop_assert_eq!(dfs, bfs);
    }

    #[test]
    fn prop_traces_start_and_end_with_markers(values in prop::collection::vec(-20i64..20, 1..15)) {
        let mut session = Session::new(EngineConfig::default()).unwrap();
        for value in values {
            for (kind, command) in [
                (StructureKind::Tree, Command::Insert(value)),
                (StructureKind::LinkedList, Command::Delete(value)),
                (StructureKind::Stack, Command::Push(value)),
                (StructureKind::HashTable, Command::Get(value.to_string())),
            ] {
                let trace = session.execute(kind, &command).unwrap().trace().clone();
                let kinds = trace.kinds();
                prop_assert_eq!(kinds.first(), Some(&StepKind::Start));
                prop_assert_eq!(kinds.last(), Some(&StepKind::Done));

                // Replaying is deterministic
                let mut first = Playback::new(trace.clone());
                let mut second = Playback::new(trace);
                while let Some(step) = first.advance() {
                    prop_assert_eq!(Some(step), second.advance());
                }
                prop_assert!(second.is_done());
            }
        }
    }
}
