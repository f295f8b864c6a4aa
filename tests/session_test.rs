// Integration tests for sessions and the traces they produce

use std::time::Duration;

use structviz::command::{Command, StructureKind};
use structviz::engine::errors::{CommandError, ConfigError};
use structviz::engine::{EngineConfig, Session};
use structviz::trace::{Locator, Output, Snapshot, StepKind, Trace};

fn session() -> Session {
    Session::new(EngineConfig::default()).expect("default config is valid")
}

/// Run each line and return the last trace
fn run(session: &mut Session, kind: StructureKind, lines: &[&str]) -> Trace {
    let mut last = None;
    for line in lines {
        let playback = session
            .execute_line(kind, line)
            .unwrap_or_else(|e| panic!("'{}' failed: {}", line, e));
        last = Some(playback.trace().clone());
    }
    last.expect("at least one command")
}

fn assert_well_formed(trace: &Trace) {
    let kinds = trace.kinds();
    assert_eq!(kinds.first(), Some(&StepKind::Start), "{:?}", kinds);
    assert_eq!(kinds.last(), Some(&StepKind::Done), "{:?}", kinds);
    assert_eq!(kinds.iter().filter(|k| **k == StepKind::Start).count(), 1);
    assert_eq!(kinds.iter().filter(|k| **k == StepKind::Done).count(), 1);
    if let Some(at) = trace.applied_at() {
        assert!(at > 0 && at < trace.len());
    }
}

/// The item a locator points at in `snapshot`, rendered as a string
fn highlighted(snapshot: &Snapshot, locator: &Locator) -> Option<String> {
    match (snapshot, locator) {
        (
            Snapshot::LinkedList { values } | Snapshot::Stack { values } | Snapshot::Queue { values },
            Locator::Position(i),
        ) => values.get(*i).map(|v| v.to_string()),
        (Snapshot::Tree(tree), Locator::Node(value)) => {
            tree.index_of(*value).map(|i| tree.nodes[i].value.to_string())
        }
        (
            Snapshot::HashTable { buckets },
            Locator::Bucket {
                index,
                slot: Some(slot),
            },
        ) => buckets
            .get(*index)
            .and_then(|b| b.entries.get(*slot))
            .map(|(key, _)| key.clone()),
        (Snapshot::Graph { vertices, .. }, Locator::Vertex(id)) => {
            vertices.contains(id).then(|| id.clone())
        }
        (Snapshot::Graph { edges, .. }, Locator::Edge(a, b)) => edges
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
            .then(|| format!("{}-{}", a, b)),
        _ => None,
    }
}

#[test]
fn test_config_validation() {
    assert!(matches!(
        Session::new(EngineConfig::default().with_bucket_count(0)),
        Err(ConfigError::ZeroBuckets)
    ));
    assert!(matches!(
        Session::new(EngineConfig::default().with_max_nodes(0)),
        Err(ConfigError::ZeroCapacity)
    ));
    assert!(matches!(
        Session::new(EngineConfig::default().with_step_delay(Duration::ZERO)),
        Err(ConfigError::ZeroStepDelay)
    ));
}

#[test]
fn test_tree_inorder_after_inserts() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::Tree,
        &[
            "insert 50", "insert 30", "insert 70", "insert 20", "insert 40", "insert 60",
            "insert 80", "inorder",
        ],
    );
    assert_well_formed(&trace);
    assert_eq!(
        trace.output(),
        &Output::Values(vec![20, 30, 40, 50, 60, 70, 80])
    );
    let emitted: Vec<&str> = trace
        .steps_of(StepKind::Emit)
        .map(|s| s.subject.as_str())
        .collect();
    assert_eq!(emitted, ["20", "30", "40", "50", "60", "70", "80"]);
    assert_eq!(trace.applied_at(), None);
}

#[test]
fn test_tree_insert_trace_visits_path() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::Tree,
        &["insert 50", "insert 30", "insert 40"],
    );
    assert_well_formed(&trace);
    let visited: Vec<&Locator> = trace
        .steps_of(StepKind::Visit)
        .map(|s| &s.locator)
        .collect();
    assert_eq!(visited, [&Locator::Node(50), &Locator::Node(30)]);
    assert!(trace.steps()[1].note.contains("40 < 50"));
    assert!(trace.steps()[2].note.contains("40 > 30"));

    let insert = &trace.steps()[3];
    assert_eq!(insert.kind, StepKind::Insert);
    assert_eq!(trace.applied_at(), Some(3));
    assert!(insert.note.contains("right child of 30"));
}

#[test]
fn test_tree_duplicate_is_rejected() {
    let mut session = session();
    let trace = run(&mut session, StructureKind::Tree, &["insert 50", "insert 50"]);
    assert_well_formed(&trace);
    assert!(!trace.outcome().success);
    assert_eq!(trace.outcome().reason, Some("duplicate"));
    assert_eq!(trace.steps_of(StepKind::Rejected).count(), 1);
    assert_eq!(trace.before(), trace.after());
    assert_eq!(session.tree().node_count(), 1);
}

#[test]
fn test_tree_capacity_is_rejected() {
    let config = EngineConfig::default().with_max_nodes(2);
    let mut session = Session::new(config).unwrap();
    let trace = run(
        &mut session,
        StructureKind::Tree,
        &["insert 1", "insert 2", "insert 3"],
    );
    assert_eq!(trace.outcome().reason, Some("capacity"));
    // No comparisons are made against a full tree
    assert_eq!(
        trace.kinds(),
        [StepKind::Start, StepKind::Rejected, StepKind::Done]
    );
    assert_eq!(session.tree().in_order(), vec![1, 2]);
}

#[test]
fn test_tree_delete_two_children() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::Tree,
        &["insert 50", "insert 30", "insert 70", "insert 60", "delete 50"],
    );
    assert_well_formed(&trace);
    assert!(trace.outcome().success);
    let found = trace.steps_of(StepKind::Found).next().expect("successor step");
    assert_eq!(found.locator, Locator::Node(60));
    assert_eq!(session.tree().in_order(), vec![30, 60, 70]);
}

#[test]
fn test_tree_search_missing() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::Tree,
        &["insert 50", "insert 70", "search 65"],
    );
    assert_eq!(trace.output(), &Output::Absent);
    assert_eq!(trace.outcome().reason, Some("not_found"));
    assert_eq!(trace.steps_of(StepKind::Visit).count(), 2);
    assert_eq!(trace.steps_of(StepKind::NotFound).count(), 1);
}

#[test]
fn test_hash_put_trace() {
    let mut session = session();
    let trace = run(&mut session, StructureKind::HashTable, &["put apple red"]);
    assert_well_formed(&trace);
    assert_eq!(
        trace.kinds(),
        [
            StepKind::Start,
            StepKind::HashComputed,
            StepKind::BucketLocated,
            StepKind::Insert,
            StepKind::Done
        ]
    );
    let hash = &trace.steps()[1];
    assert!(hash.note.contains("530"), "{}", hash.note);
    assert_eq!(
        hash.locator,
        Locator::Bucket {
            index: 0,
            slot: None
        }
    );
    assert_eq!(trace.output(), &Output::Bucket(0));
}

#[test]
fn test_hash_update_and_get() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::HashTable,
        &["put ab one", "put ba two", "put ab three"],
    );
    assert_eq!(trace.steps_of(StepKind::Update).count(), 1);
    assert_eq!(trace.steps_of(StepKind::Compare).count(), 1);
    assert_eq!(session.table().len(), 2);

    let trace = run(&mut session, StructureKind::HashTable, &["get ba"]);
    assert_eq!(trace.output(), &Output::Text("two".to_string()));
    // Both chain entries are compared before the match
    assert_eq!(trace.steps_of(StepKind::Compare).count(), 2);

    let trace = run(&mut session, StructureKind::HashTable, &["get pear"]);
    assert_eq!(trace.output(), &Output::Absent);
    assert!(!trace.outcome().success);

    let trace = run(&mut session, StructureKind::HashTable, &["has pear"]);
    assert_eq!(trace.output(), &Output::Flag(false));
    assert!(trace.outcome().success);
}

#[test]
fn test_hash_remove() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::HashTable,
        &["put apple red", "delete apple"],
    );
    assert_well_formed(&trace);
    assert_eq!(trace.output(), &Output::Flag(true));
    assert!(session.table().is_empty());

    let trace = run(&mut session, StructureKind::HashTable, &["delete apple"]);
    assert_eq!(trace.outcome().reason, Some("not_found"));
    assert_eq!(trace.applied_at(), None);
}

#[test]
fn test_stack_scenario() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::Stack,
        &["push 1", "push 2", "push 3", "pop"],
    );
    assert_eq!(trace.output(), &Output::Value(3));
    assert_eq!(trace.after(), &Snapshot::Stack { values: vec![1, 2] });

    let trace = run(&mut session, StructureKind::Stack, &["peek"]);
    assert_eq!(trace.output(), &Output::Value(2));
    assert_eq!(trace.applied_at(), None);
}

#[test]
fn test_empty_pop_and_dequeue() {
    let mut session = session();
    for (kind, line) in [(StructureKind::Stack, "pop"), (StructureKind::Queue, "dequeue")] {
        let trace = run(&mut session, kind, &[line]);
        assert_well_formed(&trace);
        assert_eq!(trace.output(), &Output::Absent);
        assert_eq!(trace.outcome().reason, Some("empty"));
    }
}

#[test]
fn test_queue_scenario() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::Queue,
        &["enqueue 1", "enqueue 2", "enqueue 3", "dequeue"],
    );
    assert_eq!(trace.output(), &Output::Value(1));
    assert_eq!(session.queue().to_vec(), vec![2, 3]);
    let dequeued = trace.steps_of(StepKind::Delete).next().expect("delete step");
    assert_eq!(dequeued.locator, Locator::Position(0));
}

#[test]
fn test_list_scenarios() {
    let mut session = session();
    let trace = run(
        &mut session,
        StructureKind::LinkedList,
        &["tail 1", "tail 2", "tail 4", "insert 3 at 2"],
    );
    assert_well_formed(&trace);
    assert_eq!(trace.output(), &Output::Position(2));
    assert_eq!(trace.steps_of(StepKind::Visit).count(), 2);

    let trace = run(&mut session, StructureKind::LinkedList, &["search 4"]);
    assert_eq!(trace.output(), &Output::Position(3));
    assert_eq!(trace.steps_of(StepKind::Compare).count(), 4);

    let trace = run(&mut session, StructureKind::LinkedList, &["delete 9"]);
    assert_eq!(trace.output(), &Output::Absent);
    assert_eq!(session.list().to_vec(), vec![1, 2, 3, 4]);

    let trace = run(&mut session, StructureKind::LinkedList, &["insert 5 at 99"]);
    assert_eq!(trace.output(), &Output::Position(4));
}

#[test]
fn test_graph_scenarios() {
    let mut session = session();
    let trace = run(&mut session, StructureKind::Graph, &["edge A B"]);
    assert_well_formed(&trace);
    // Two vertices and the edge are created; the edge is the switch point
    assert_eq!(trace.steps_of(StepKind::Insert).count(), 3);
    assert_eq!(trace.applied_at(), Some(3));
    assert_eq!(
        trace.steps()[3].locator,
        Locator::Edge("A".to_string(), "B".to_string())
    );

    let trace = run(&mut session, StructureKind::Graph, &["edge B A"]);
    assert!(trace.outcome().success);
    assert_eq!(trace.applied_at(), None);
    assert_eq!(session.graph().neighbors("A"), ["B".to_string()]);

    let trace = run(&mut session, StructureKind::Graph, &["edge A A"]);
    assert_eq!(trace.outcome().reason, Some("self_loop"));

    let trace = run(&mut session, StructureKind::Graph, &["edge B C", "bfs A"]);
    assert_eq!(
        trace.output(),
        &Output::Vertices(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );

    let trace = run(&mut session, StructureKind::Graph, &["dfs Z"]);
    assert_eq!(trace.output(), &Output::Vertices(Vec::new()));

    let trace = run(&mut session, StructureKind::Graph, &["unvertex B"]);
    assert_well_formed(&trace);
    assert_eq!(trace.steps_of(StepKind::Delete).count(), 3);
    assert_eq!(session.graph().edge_count(), 0);
}

#[test]
fn test_removal_highlights_the_removed_item() {
    let cases: [(StructureKind, &[&str], &str, &str); 7] = [
        (StructureKind::Queue, &["enqueue 1", "enqueue 2", "enqueue 3"], "dequeue", "1"),
        (StructureKind::Stack, &["push 1", "push 2"], "pop", "2"),
        (StructureKind::LinkedList, &["tail 5", "tail 7", "tail 9"], "delete 5", "5"),
        (StructureKind::HashTable, &["put ab 1", "put ba 2"], "remove ab", "ab"),
        (
            StructureKind::Tree,
            &["insert 50", "insert 30", "insert 70", "insert 60"],
            "delete 50",
            "50",
        ),
        (StructureKind::Graph, &["edge A B", "edge B C"], "unedge A B", "A-B"),
        (StructureKind::Graph, &["edge A B", "edge B C"], "unvertex B", "B"),
    ];

    for (kind, setup, command, removed) in cases {
        let mut session = session();
        run(&mut session, kind, setup);
        let playback = session.execute_line(kind, command).unwrap();
        let delete_at = playback
            .trace()
            .kinds()
            .iter()
            .rposition(|k| *k == StepKind::Delete)
            .expect("delete step");

        while playback.position() <= delete_at {
            playback.advance();
        }
        let locator = playback.highlight().expect("delete step has a locator").clone();
        assert_eq!(
            highlighted(playback.visible_snapshot(), &locator).as_deref(),
            Some(removed),
            "{}: {}",
            kind,
            command
        );

        // The removal shows from the next step on
        playback.advance();
        assert_eq!(playback.visible_snapshot(), playback.trace().after());
        assert_ne!(
            highlighted(playback.trace().after(), &locator).as_deref(),
            Some(removed)
        );
    }
}

#[test]
fn test_new_command_discards_playback() {
    let mut session = session();
    session
        .execute(StructureKind::Tree, &Command::Insert(50))
        .unwrap()
        .advance();
    session
        .execute(StructureKind::Tree, &Command::Insert(30))
        .unwrap();

    // The abandoned trace's mutation is kept; the new playback starts fresh
    let playback = session.playback().expect("playback installed");
    assert_eq!(playback.position(), 0);
    assert_eq!(session.tree().in_order(), vec![30, 50]);
    assert_eq!(session.executed(), 2);
}

#[test]
fn test_rejected_command_keeps_playback() {
    let mut session = session();
    session.execute_line(StructureKind::Stack, "push 1").unwrap();
    assert!(matches!(
        session.execute_line(StructureKind::Stack, "dfs A"),
        Err(CommandError::Unsupported { .. })
    ));
    assert_eq!(session.playback_kind(), Some(StructureKind::Stack));
    assert!(session.cancel());
    assert!(!session.cancel());
}

#[test]
fn test_visible_snapshot_follows_playback() {
    let mut session = session();
    session.execute_line(StructureKind::Queue, "enqueue 7").unwrap();
    assert_eq!(
        session.visible_snapshot(StructureKind::Queue),
        Snapshot::Queue { values: vec![] }
    );
    session.playback_mut().unwrap().run_to_end();
    assert_eq!(
        session.visible_snapshot(StructureKind::Queue),
        Snapshot::Queue { values: vec![7] }
    );
    // Other structures are unaffected by the queue's playback
    assert_eq!(
        session.visible_snapshot(StructureKind::Stack),
        Snapshot::Stack { values: vec![] }
    );
}

#[test]
fn test_clear_every_structure() {
    let mut session = session();
    run(&mut session, StructureKind::LinkedList, &["tail 1"]);
    run(&mut session, StructureKind::Tree, &["insert 1"]);
    run(&mut session, StructureKind::HashTable, &["put a b"]);
    run(&mut session, StructureKind::Graph, &["vertex A"]);
    for kind in StructureKind::ALL {
        let trace = run(&mut session, kind, &["clear"]);
        assert_well_formed(&trace);
        assert_eq!(session.snapshot(kind).item_count(), 0);
    }
}

#[test]
fn test_trace_serializes_to_json() {
    let mut session = session();
    let trace = run(&mut session, StructureKind::Tree, &["insert 5"]);
    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json["title"], "Inserting 5 into the tree");
    assert_eq!(json["steps"][1]["kind"], "insert");
    assert_eq!(json["steps"][1]["locator"]["type"], "node");
    assert_eq!(json["after"]["structure"], "tree");
    assert_eq!(json["outcome"]["success"], true);
}
