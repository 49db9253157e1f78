//! Property-based checks of reachability over random snapshots.
//!
//! Snapshots are `n0..nN` in the `default` namespace; each object depends on
//! a random list of indices, some of which point past the end of the
//! snapshot (dangling) or at the object itself.

use std::collections::BTreeSet;

use proptest::collection::vec;
use proptest::prelude::*;

use depview_cli::core::ObjectRef;
use depview_cli::graph::{DependsOnRef, GraphNode, NodeMap, get_neighbors, get_reachable_graph};

fn name(index: usize) -> String {
    format!("n{index}")
}

fn snapshot(deps: &[Vec<usize>]) -> NodeMap {
    let nodes = deps.iter().enumerate().map(|(i, targets)| {
        targets
            .iter()
            .fold(GraphNode::new("default", name(i)), |node, &t| {
                node.depends_on(DependsOnRef::new(name(t)))
            })
    });
    NodeMap::from_nodes(nodes).unwrap()
}

/// Undirected component of `start` by union-find, self loops and dangling
/// targets ignored.
fn expected_component(deps: &[Vec<usize>], start: usize) -> BTreeSet<String> {
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    let n = deps.len();
    let mut parent: Vec<usize> = (0..n).collect();
    for (from, targets) in deps.iter().enumerate() {
        for &to in targets.iter().filter(|&&to| to < n && to != from) {
            let (a, b) = (find(&mut parent, from), find(&mut parent, to));
            parent[a] = b;
        }
    }

    let root = find(&mut parent, start);
    (0..n)
        .filter(|&i| find(&mut parent, i) == root)
        .map(|i| format!("default/{}", name(i)))
        .collect()
}

fn snapshot_strategy() -> impl Strategy<Value = (Vec<Vec<usize>>, usize)> {
    (1usize..9).prop_flat_map(|n| (vec(vec(0..n + 2, 0..4), n), 0..n))
}

proptest! {
    #[test]
    fn reachable_graph_is_deterministic((deps, start) in snapshot_strategy()) {
        let map = snapshot(&deps);
        let start = ObjectRef::new("default", name(start));

        let ids = || -> Vec<String> {
            get_reachable_graph(&map, &start).into_iter().map(|n| n.id).collect()
        };
        prop_assert_eq!(ids(), ids());
    }

    #[test]
    fn reachable_graph_is_exactly_the_component((deps, start) in snapshot_strategy()) {
        let map = snapshot(&deps);
        let expected = expected_component(&deps, start);
        let result = get_reachable_graph(&map, &ObjectRef::new("default", name(start)));

        let ids: Vec<String> = result.iter().map(|n| n.id.clone()).collect();
        let unique: BTreeSet<String> = ids.iter().cloned().collect();
        prop_assert_eq!(unique.len(), ids.len(), "duplicate ids in {:?}", ids);

        if expected.len() == 1 {
            prop_assert!(ids.is_empty());
        } else {
            prop_assert_eq!(unique, expected);
        }
    }

    #[test]
    fn start_node_alone_is_marked_current((deps, start) in snapshot_strategy()) {
        let map = snapshot(&deps);
        let start_id = format!("default/{}", name(start));
        let result = get_reachable_graph(&map, &ObjectRef::new("default", name(start)));

        if !result.is_empty() {
            let current: Vec<&str> =
                result.iter().filter(|n| n.is_current_node).map(|n| n.id.as_str()).collect();
            prop_assert_eq!(current, vec![start_id.as_str()]);
        }
    }

    #[test]
    fn neighbors_never_include_missing_objects((deps, start) in snapshot_strategy()) {
        let map = snapshot(&deps);
        let node = map.get(&format!("default/{}", name(start))).unwrap();

        let neighbors = get_neighbors(&map, node);
        prop_assert!(neighbors.iter().all(|n| map.contains(&n.id())));
        if neighbors.is_empty() {
            prop_assert!(get_reachable_graph(&map, &node.object_ref()).is_empty());
        }
    }
}
