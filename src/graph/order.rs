//! Apply order and cycle detection.
//!
//! GitOps controllers only reconcile an object once everything in its
//! `dependsOn` list is ready. The apply order lists objects so that every
//! object comes after all of its dependencies; a cycle makes such an order
//! impossible and is reported with the offending chain.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::{DependencyGraph, GraphNode};
use crate::core::{DepviewError, ObjectRef};

/// Color states for cycle detection using DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Node has not been visited.
    White,
    /// Node is on the current DFS path.
    Gray,
    /// Node and everything below it has been visited.
    Black,
}

/// Directed view of a subset of a snapshot: edges point from an object to its dependencies.
struct DirectedView {
    graph: DiGraph<usize, ()>,
}

impl DirectedView {
    fn build(source: &DependencyGraph<'_>, members: &[usize]) -> Self {
        let mut graph = DiGraph::with_capacity(members.len(), 0);
        let mut indices: HashMap<usize, NodeIndex> = HashMap::with_capacity(members.len());
        for &member in members {
            indices.insert(member, graph.add_node(member));
        }

        for &member in members {
            let from = indices[&member];
            for dependency in source.adjacency.dependencies(member) {
                if let Some(&to) = indices.get(dependency)
                    && !graph.contains_edge(from, to)
                {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self {
            graph,
        }
    }

    /// First cycle found, as snapshot indices with the first node repeated at the end.
    fn find_cycle(&self) -> Option<Vec<usize>> {
        let mut colors = vec![Color::White; self.graph.node_count()];
        let mut path = Vec::new();

        for node in self.graph.node_indices() {
            if colors[node.index()] == Color::White
                && let Some(cycle) = self.dfs_visit(node, &mut colors, &mut path)
            {
                return Some(cycle);
            }
        }
        None
    }

    fn dfs_visit(
        &self,
        node: NodeIndex,
        colors: &mut [Color],
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<usize>> {
        colors[node.index()] = Color::Gray;
        path.push(node);

        for neighbor in self.graph.neighbors(node) {
            match colors[neighbor.index()] {
                Color::Gray => {
                    let start = path.iter().position(|&n| n == neighbor).unwrap_or(0);
                    let mut cycle: Vec<usize> = path[start..].iter().map(|&n| self.graph[n]).collect();
                    cycle.push(self.graph[neighbor]);
                    return Some(cycle);
                }
                Color::White => {
                    if let Some(cycle) = self.dfs_visit(neighbor, colors, path) {
                        return Some(cycle);
                    }
                }
                Color::Black => {}
            }
        }

        path.pop();
        colors[node.index()] = Color::Black;
        None
    }

    /// Members with every dependency before its dependents.
    fn dependencies_first(&self) -> Result<Vec<usize>, DepviewError> {
        let sorted = toposort(&self.graph, None).map_err(|cycle| DepviewError::CircularDependency {
            chain: format!("cycle through node {}", self.graph[cycle.node_id()]),
        })?;
        // toposort puts dependents before their dependencies.
        Ok(sorted.into_iter().rev().map(|index| self.graph[index]).collect())
    }
}

impl<'a> DependencyGraph<'a> {
    /// Fail with [`DepviewError::CircularDependency`] if any `dependsOn` chain loops.
    pub fn detect_cycles(&self) -> Result<(), DepviewError> {
        let members: Vec<usize> = (0..self.nodes.len()).collect();
        self.check_acyclic(&DirectedView::build(self, &members))
    }

    /// Every object of the snapshot, each after all of its dependencies.
    pub fn apply_order(&self) -> Result<Vec<&'a GraphNode>, DepviewError> {
        let members: Vec<usize> = (0..self.nodes.len()).collect();
        self.ordered(&members)
    }

    /// Apply order restricted to the reachable graph of `start`.
    ///
    /// Empty when `start` is unknown or has no connections, like
    /// [`reachable_from`](Self::reachable_from). Cycles elsewhere in the
    /// snapshot do not affect the result.
    pub fn apply_order_for(&self, start: &ObjectRef) -> Result<Vec<&'a GraphNode>, DepviewError> {
        let Some(start_index) = self.nodes.index_of(&start.id()) else {
            return Ok(Vec::new());
        };
        let members = self.component_of(start_index);
        if members.len() == 1 {
            return Ok(Vec::new());
        }
        self.ordered(&members)
    }

    fn ordered(&self, members: &[usize]) -> Result<Vec<&'a GraphNode>, DepviewError> {
        let view = DirectedView::build(self, members);
        self.check_acyclic(&view)?;
        let order = view.dependencies_first()?;
        tracing::debug!("Apply order computed for {} objects", order.len());
        Ok(self.resolve(&order))
    }

    fn check_acyclic(&self, view: &DirectedView) -> Result<(), DepviewError> {
        match view.find_cycle() {
            Some(cycle) => {
                let ids: Vec<String> = cycle.iter().map(|&i| self.nodes.node_at(i).id()).collect();
                let chain = ids.join(" → ");
                tracing::debug!("Cycle detected: {}", chain);
                Err(DepviewError::CircularDependency {
                    chain,
                })
            }
            None => Ok(()),
        }
    }
}
