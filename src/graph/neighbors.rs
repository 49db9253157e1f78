//! Direct neighbors of a node, in both directions.

use super::{GraphNode, NodeMap};

/// Nodes directly connected to `current`.
///
/// The result holds the nodes `current` depends on, in `dependsOn` declaration
/// order, followed by the nodes that depend on `current`, in node map order.
/// Dangling references are dropped. `current` does not have to be a member of
/// `node_map`; only its `dependsOn` list and its (namespace, name) are used.
///
/// No deduplication is done across the two halves: a node that both depends
/// on `current` and is depended on by it is returned twice. Repeating a
/// `dependsOn` entry also repeats the dependency.
///
/// This scans the whole map once. Traversals over one snapshot should use
/// [`DependencyGraph`](super::DependencyGraph), which precomputes adjacency.
#[must_use]
pub fn get_neighbors<'a>(node_map: &'a NodeMap, current: &GraphNode) -> Vec<&'a GraphNode> {
    let mut neighbors: Vec<&'a GraphNode> = current
        .dependency_ids()
        .filter_map(|id| node_map.get(&id))
        .collect();

    let target = current.object_ref();
    neighbors.extend(node_map.iter().filter(|node| node.declares_dependency_on(&target)));

    tracing::trace!("{} has {} direct neighbors", target, neighbors.len());
    neighbors
}
