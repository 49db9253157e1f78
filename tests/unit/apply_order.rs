//! Apply order and cycle reporting.

use depview_cli::core::{DepviewError, ObjectRef};
use depview_cli::graph::{DependencyGraph, DependsOnRef, GraphNode, NodeMap};
use depview_cli::test_utils::SnapshotFixture;

fn position(order: &[&GraphNode], id: &str) -> usize {
    order.iter().position(|n| n.id() == id).unwrap()
}

#[test]
fn every_object_follows_its_dependencies() {
    let map = SnapshotFixture::cross_namespace();
    let graph = DependencyGraph::new(&map);
    let order = graph.apply_order().unwrap();

    assert_eq!(order.len(), 3);
    for node in &order {
        for dependency in node.dependency_ids() {
            assert!(position(&order, &dependency) < position(&order, &node.id()));
        }
    }
}

#[test]
fn component_order_excludes_unrelated_objects() {
    let map = SnapshotFixture::isolated();
    let graph = DependencyGraph::new(&map);

    let ids: Vec<String> = graph
        .apply_order_for(&ObjectRef::new("default", "b"))
        .unwrap()
        .iter()
        .map(|n| n.id())
        .collect();
    assert_eq!(ids, vec!["default/c", "default/b"]);
    assert!(graph.apply_order_for(&ObjectRef::new("default", "x")).unwrap().is_empty());
}

#[test]
fn cycle_is_reported_with_its_chain() {
    let map = NodeMap::from_nodes([
        GraphNode::new("default", "a").depends_on(DependsOnRef::new("b")),
        GraphNode::new("default", "b").depends_on(DependsOnRef::new("c")),
        GraphNode::new("default", "c").depends_on(DependsOnRef::new("a")),
        GraphNode::new("default", "d"),
    ])
    .unwrap();
    let graph = DependencyGraph::new(&map);

    match graph.detect_cycles() {
        Err(DepviewError::CircularDependency {
            chain,
        }) => assert_eq!(chain, "default/a → default/b → default/c → default/a"),
        other => panic!("expected a cycle, got {other:?}"),
    }
    assert!(graph.apply_order().is_err());
}

#[test]
fn dangling_references_do_not_block_ordering() {
    let map = SnapshotFixture::dangling();
    let graph = DependencyGraph::new(&map);
    assert!(graph.detect_cycles().is_ok());

    let ids: Vec<String> = graph.apply_order().unwrap().iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["default/a", "default/e"]);
}
