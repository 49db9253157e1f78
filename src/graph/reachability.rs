//! Reachable graph (connected component) of an object.
//!
//! The `dependsOn` relation is directed, but for visualization the graph is
//! traversed without regard to direction: everything connected to the start
//! object through any chain of `dependsOn` references belongs to its graph.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use super::{DependencyGraph, GraphNode, NodeMap};
use crate::core::ObjectRef;

/// A node of a traversal result, annotated for the graph view.
///
/// Serializes to the shape graph widgets expect: the node's own fields plus
/// `id`, `isCurrentNode` and `parentIds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedNode<'a> {
    /// Composite id of the node.
    pub id: String,
    /// The underlying node, borrowed from the snapshot.
    #[serde(flatten)]
    pub node: &'a GraphNode,
    /// True only for the traversal's start node.
    pub is_current_node: bool,
    /// Ids of nodes that declare this node in their `dependsOn`.
    pub parent_ids: Vec<String>,
}

/// Connected component of `start` in `node_map`, in breadth-first order.
///
/// Returns an empty vector when `start` is unknown or has no connections at
/// all. See [`DependencyGraph::reachable_from`].
#[must_use]
pub fn get_reachable_graph<'a>(node_map: &'a NodeMap, start: &ObjectRef) -> Vec<AnnotatedNode<'a>> {
    DependencyGraph::new(node_map).reachable_from(start)
}

impl<'a> DependencyGraph<'a> {
    /// Every object connected to `start`, the start object first.
    ///
    /// Nodes come out in breadth-first visitation order, siblings ordered as
    /// [`get_neighbors`](super::get_neighbors) orders them; callers that
    /// display the result should sort it. Each id appears at most once. The
    /// start node is the only one with `is_current_node` set.
    ///
    /// A missing start object, or one without any neighbor, yields an empty
    /// vector: there is no graph worth drawing.
    #[must_use]
    pub fn reachable_from(&self, start: &ObjectRef) -> Vec<AnnotatedNode<'a>> {
        let Some(start_index) = self.nodes.index_of(&start.id()) else {
            tracing::debug!("Start object {} not in snapshot", start);
            return Vec::new();
        };

        let component = self.component_of(start_index);
        if component.len() == 1 {
            tracing::debug!("{} has no dependencies or dependents", start);
            return Vec::new();
        }

        tracing::debug!("Reachable graph of {} has {} nodes", start, component.len());
        component.into_iter().map(|index| self.annotate(index, index == start_index)).collect()
    }

    /// Breadth-first visitation order of the component containing `start`.
    pub(super) fn component_of(&self, start: usize) -> Vec<usize> {
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(current) = queue.pop_front() {
            for neighbor in self.adjacency.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
            order.push(current);
        }

        order
    }

    fn annotate(&self, index: usize, is_current_node: bool) -> AnnotatedNode<'a> {
        let node = self.nodes.node_at(index);
        let parent_ids =
            self.adjacency.dependents(index).iter().map(|&i| self.nodes.node_at(i).id()).collect();
        AnnotatedNode {
            id: node.id(),
            node,
            is_current_node,
            parent_ids,
        }
    }
}
