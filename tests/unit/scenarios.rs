//! Canonical reachability and neighbor scenarios.

use std::collections::BTreeSet;

use depview_cli::core::ObjectRef;
use depview_cli::graph::{
    DependencyGraph, DependsOnRef, GraphNode, get_neighbors, get_reachable_graph,
};
use depview_cli::test_utils::{SnapshotFixture, init_test_logging};

fn id_set<'a>(ids: impl IntoIterator<Item = &'a String>) -> BTreeSet<&'a str> {
    ids.into_iter().map(String::as_str).collect()
}

#[test]
fn linear_chain_is_one_component_from_either_end() {
    init_test_logging(None);
    let map = SnapshotFixture::linear_chain();

    let from_c = get_reachable_graph(&map, &ObjectRef::new("default", "c"));
    let from_a = get_reachable_graph(&map, &ObjectRef::new("default", "a"));

    let expected = BTreeSet::from(["default/a", "default/b", "default/c"]);
    assert_eq!(id_set(from_c.iter().map(|n| &n.id)), expected);
    assert_eq!(id_set(from_a.iter().map(|n| &n.id)), expected);
    assert_eq!(from_c[0].id, "default/c");
    assert_eq!(from_a[0].id, "default/a");
}

#[test]
fn isolated_object_has_no_graph() {
    let map = SnapshotFixture::isolated();
    assert!(get_reachable_graph(&map, &ObjectRef::new("default", "x")).is_empty());
    assert_eq!(get_reachable_graph(&map, &ObjectRef::new("default", "b")).len(), 2);
}

#[test]
fn diamond_reaches_sibling_through_shared_dependency() {
    let map = SnapshotFixture::diamond();
    let result = get_reachable_graph(&map, &ObjectRef::new("default", "d"));

    let ids: Vec<&str> = result.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["default/d", "default/b", "default/a", "default/c"]);

    let a = result.iter().find(|n| n.id == "default/a").unwrap();
    assert_eq!(a.parent_ids, vec!["default/b", "default/c"]);
    assert!(result.iter().filter(|n| n.is_current_node).all(|n| n.id == "default/d"));
}

#[test]
fn dangling_reference_is_skipped() {
    let map = SnapshotFixture::dangling();
    let e = map.get("default/e").unwrap();

    let neighbors: Vec<String> = get_neighbors(&map, e).iter().map(|n| n.id()).collect();
    assert_eq!(neighbors, vec!["default/a"]);

    let alone = GraphNode::new("default", "e2").depends_on(DependsOnRef::new("ghost"));
    assert!(get_neighbors(&map, &alone).is_empty());
}

#[test]
fn cross_namespace_references_resolve() {
    let map = SnapshotFixture::cross_namespace();
    let graph = DependencyGraph::new(&map);

    let vpc = ObjectRef::new("infra", "vpc");
    let dependents: Vec<String> = graph.dependents_of(&vpc).iter().map(|n| n.id()).collect();
    assert_eq!(dependents, vec!["infra/dns", "apps/app"]);

    let result = graph.reachable_from(&ObjectRef::new("apps", "app"));
    assert_eq!(result.len(), 3);
}

#[test]
fn traversal_leaves_snapshot_untouched() {
    let map = SnapshotFixture::diamond();
    let before = map.clone();

    let first = get_reachable_graph(&map, &ObjectRef::new("default", "d"));
    let second = get_reachable_graph(&map, &ObjectRef::new("default", "a"));

    assert_eq!(map, before);
    assert!(first.iter().any(|n| n.is_current_node && n.id == "default/d"));
    assert!(second.iter().any(|n| n.is_current_node && n.id == "default/a"));
    assert!(!first.iter().any(|n| n.is_current_node && n.id == "default/a"));
}

#[test]
fn unknown_start_yields_nothing() {
    let map = SnapshotFixture::linear_chain();
    assert!(get_reachable_graph(&map, &ObjectRef::new("other", "a")).is_empty());
}
