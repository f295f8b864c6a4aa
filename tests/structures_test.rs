// Integration tests for the data structures on their own

use structviz::engine::errors::OpError;
use structviz::structures::bst::{BinarySearchTree, DeleteCase};
use structviz::structures::graph::Graph;
use structviz::structures::hash_table::HashTable;
use structviz::structures::linked_list::LinkedList;
use structviz::structures::queue::Queue;
use structviz::structures::stack::Stack;

fn sample_tree() -> BinarySearchTree {
    let mut tree = BinarySearchTree::new(15);
    for value in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(value).expect("insert failed");
    }
    tree
}

#[test]
fn test_list_insert_positions() {
    let mut list = LinkedList::new();
    list.insert_at_tail(2);
    list.insert_at_head(1);
    list.insert_at_tail(4);
    assert_eq!(list.insert_at_position(3, 2), 2);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);

    // Past the end clamps to a tail insert
    assert_eq!(list.insert_at_position(9, 100), 4);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 9]);
    assert_eq!(list.insert_at_position(0, 0), 0);
    assert_eq!(list.len(), 6);
}

#[test]
fn test_list_delete_and_search() {
    let mut list = LinkedList::new();
    for v in [5, 7, 5, 9] {
        list.insert_at_tail(v);
    }
    assert_eq!(list.search(9), Some(3));
    assert_eq!(list.delete(5), Some(0));
    assert_eq!(list.to_vec(), vec![7, 5, 9]);
    assert_eq!(list.delete(42), None);
    assert_eq!(list.len(), 3);
    assert_eq!(list.search(42), None);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.delete(7), None);
}

#[test]
fn test_list_long_drop() {
    let mut list = LinkedList::new();
    for v in 0..100_000 {
        list.insert_at_head(v);
    }
    assert_eq!(list.len(), 100_000);
    drop(list);
}

#[test]
fn test_list_long_clone() {
    let mut list = LinkedList::new();
    for v in 0..200_000 {
        list.insert_at_head(v);
    }
    let copy = list.clone();
    assert_eq!(copy.len(), 200_000);
    assert_eq!(copy.head().map(|n| n.value), Some(199_999));
    assert!(copy.iter().eq(list.iter()));

    // The copy owns its own nodes
    list.clear();
    assert_eq!(copy.iter().last(), Some(0));
}

#[test]
fn test_stack_lifo() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.peek(), Some(2));
    assert_eq!(stack.size(), 2);
    assert_eq!(stack.to_vec(), vec![1, 2]);
    stack.clear();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_queue_fifo() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.peek(), Some(2));
    assert_eq!(queue.to_vec(), vec![2, 3]);
    assert_eq!(queue.size(), 2);
    queue.dequeue();
    queue.dequeue();
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

#[test]
fn test_bst_traversals() {
    let tree = sample_tree();
    assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.pre_order(), vec![50, 30, 20, 40, 70, 60, 80]);
    assert_eq!(tree.post_order(), vec![20, 40, 30, 60, 80, 70, 50]);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.node_count(), 7);
}

#[test]
fn test_bst_find_path() {
    let tree = sample_tree();
    assert_eq!(tree.find_path_values(60), vec![50, 70, 60]);
    // A missing value keeps the nodes visited on the way down
    assert_eq!(tree.find_path_values(65), vec![50, 70, 60]);
    assert!(tree.contains(40));
    assert!(!tree.contains(45));
}

#[test]
fn test_bst_duplicate_rejected() {
    let mut tree = sample_tree();
    assert_eq!(tree.insert(40), Err(OpError::DuplicateValue(40)));
    assert_eq!(tree.node_count(), 7);
}

#[test]
fn test_bst_capacity() {
    let mut tree = BinarySearchTree::new(3);
    tree.insert(2).unwrap();
    tree.insert(1).unwrap();
    tree.insert(3).unwrap();
    assert!(tree.is_full());
    assert_eq!(tree.insert(4), Err(OpError::CapacityExceeded { limit: 3 }));
    // Capacity is checked before duplicates
    assert_eq!(tree.insert(2), Err(OpError::CapacityExceeded { limit: 3 }));
    assert_eq!(tree.in_order(), vec![1, 2, 3]);
}

#[test]
fn test_bst_delete_cases() {
    let mut tree = sample_tree();
    assert_eq!(tree.delete(20), Ok(DeleteCase::Leaf));
    assert_eq!(tree.delete(30), Ok(DeleteCase::OneChild));
    assert_eq!(tree.delete(50), Ok(DeleteCase::TwoChildren { successor: 60 }));
    assert_eq!(tree.in_order(), vec![40, 60, 70, 80]);
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.root().and_then(|r| tree.value(r)), Some(60));
    assert_eq!(tree.delete(50), Err(OpError::NotFound("50".to_string())));
}

#[test]
fn test_bst_slots_reused_after_delete() {
    let mut tree = BinarySearchTree::new(2);
    tree.insert(1).unwrap();
    tree.insert(2).unwrap();
    tree.delete(1).unwrap();
    tree.insert(0).unwrap();
    assert_eq!(tree.in_order(), vec![0, 2]);
    assert_eq!(tree.edges(), vec![(2, 0)]);
}

#[test]
fn test_hash_index_is_char_code_sum() {
    let table: HashTable = HashTable::new(10);
    // a=97 p=112 p=112 l=108 e=101
    assert_eq!(HashTable::<String>::char_code_sum("apple"), 530);
    assert_eq!(table.hash("apple"), 0);
    assert_eq!(table.hash(""), 0);
}

#[test]
fn test_hash_collisions_chain_in_order() {
    let mut table: HashTable = HashTable::new(10);
    // "ab" and "ba" have the same sum
    let first = table.insert("ab", "1".to_string());
    let second = table.insert("ba", "2".to_string());
    assert_eq!(first.bucket, second.bucket);
    assert_eq!((first.slot, second.slot), (0, 1));
    assert!(!second.updated);

    let again = table.insert("ab", "3".to_string());
    assert!(again.updated);
    assert_eq!(again.slot, 0);
    assert_eq!(table.get("ab").map(String::as_str), Some("3"));
    assert_eq!(table.len(), 2);

    assert!(table.delete("ab"));
    assert_eq!(table.slot_of("ba"), Some(0));
    assert!(!table.delete("ab"));
    assert!(!table.has("ab"));
}

#[test]
fn test_graph_edges_are_idempotent() {
    let mut graph = Graph::new();
    assert_eq!(graph.add_edge("A", "B"), Ok(true));
    assert_eq!(graph.add_edge("B", "A"), Ok(false));
    assert_eq!(graph.neighbors("A"), ["B".to_string()]);
    assert_eq!(graph.neighbors("B"), ["A".to_string()]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.vertices(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn test_graph_self_loop_rejected() {
    let mut graph = Graph::new();
    assert_eq!(
        graph.add_edge("A", "A"),
        Err(OpError::SelfLoop("A".to_string()))
    );
    assert!(!graph.has_vertex("A"));
}

#[test]
fn test_graph_traversals() {
    let mut graph = Graph::new();
    for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")] {
        graph.add_edge(a, b).unwrap();
    }
    assert_eq!(graph.depth_first("A"), ["A", "B", "D", "C", "E"]);
    assert_eq!(graph.breadth_first("A"), ["A", "B", "C", "D", "E"]);
    assert!(graph.depth_first("Z").is_empty());
    assert!(graph.breadth_first("Z").is_empty());
}

#[test]
fn test_graph_remove_vertex() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("A", "C").unwrap();
    assert_eq!(
        graph.remove_vertex("A"),
        Some(vec!["B".to_string(), "C".to_string()])
    );
    assert!(graph.neighbors("B").is_empty());
    assert!(graph.neighbors("C").is_empty());
    assert_eq!(graph.vertices(), ["B".to_string(), "C".to_string()]);
    assert_eq!(graph.remove_vertex("A"), None);
    assert!(!graph.remove_edge("B", "C"));
}
