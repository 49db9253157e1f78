//! Dependency graph over one object-list snapshot.
//!
//! [`DependencyGraph`] borrows a [`NodeMap`] and precomputes its adjacency, so
//! neighbor lookups, reachability queries and apply ordering over the same
//! snapshot never rescan the whole map. The node map is never mutated: any
//! number of graphs (and any number of queries) can share one snapshot.

use std::collections::HashSet;

use super::{Adjacency, GraphNode, NodeMap, get_neighbors};
use crate::core::ObjectRef;

/// Read-only dependency graph over a [`NodeMap`].
pub struct DependencyGraph<'a> {
    pub(super) nodes: &'a NodeMap,
    pub(super) adjacency: Adjacency,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph for a snapshot.
    #[must_use]
    pub fn new(nodes: &'a NodeMap) -> Self {
        let adjacency = Adjacency::build(nodes);
        tracing::debug!(
            "Built dependency graph: {} nodes, {} edges",
            nodes.len(),
            adjacency.edge_count()
        );
        Self {
            nodes,
            adjacency,
        }
    }

    /// Whether the snapshot contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of objects.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of resolved `dependsOn` references.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Direct neighbors of `node`, with the ordering of [`get_neighbors`].
    ///
    /// Uses the precomputed adjacency when `node` is the snapshot's own entry,
    /// and falls back to a scan for nodes that are not (or differ from) it.
    #[must_use]
    pub fn neighbors_of(&self, node: &GraphNode) -> Vec<&'a GraphNode> {
        match self.nodes.index_of(&node.id()) {
            Some(index) if self.nodes.node_at(index) == node => {
                self.adjacency.neighbors(index).map(|i| self.nodes.node_at(i)).collect()
            }
            _ => get_neighbors(self.nodes, node),
        }
    }

    /// Objects `object` declares in `dependsOn` that exist in the snapshot.
    #[must_use]
    pub fn dependencies_of(&self, object: &ObjectRef) -> Vec<&'a GraphNode> {
        self.nodes
            .index_of(&object.id())
            .map(|index| self.resolve(self.adjacency.dependencies(index)))
            .unwrap_or_default()
    }

    /// Objects that declare `object` in their `dependsOn`.
    #[must_use]
    pub fn dependents_of(&self, object: &ObjectRef) -> Vec<&'a GraphNode> {
        self.nodes
            .index_of(&object.id())
            .map(|index| self.resolve(self.adjacency.dependents(index)))
            .unwrap_or_default()
    }

    pub(super) fn resolve(&self, indices: &[usize]) -> Vec<&'a GraphNode> {
        indices.iter().map(|&i| self.nodes.node_at(i)).collect()
    }

    /// Render the connected component of `root` as a tree.
    ///
    /// Children of a node are its dependencies (`→`) followed by its
    /// dependents (`←`), leaving out the edge back to the parent. A node
    /// reached a second time is printed with `(*)` and not expanded again.
    /// Returns an empty string for unknown roots.
    #[must_use]
    pub fn to_tree_string(&self, root: &ObjectRef) -> String {
        let mut result = String::new();
        let Some(root_index) = self.nodes.index_of(&root.id()) else {
            return result;
        };

        result.push_str(&format!("{}\n", self.nodes.node_at(root_index).id()));
        let mut visited = HashSet::from([root_index]);
        let mut stack = Vec::new();
        self.push_tree_children(root_index, None, "", &mut visited, &mut stack);

        // Depth is bounded by the longest dependsOn chain, not the call stack.
        while let Some(frame) = stack.pop() {
            let connector = if frame.is_last {
                "└── "
            } else {
                "├── "
            };
            let marker = if frame.expand {
                ""
            } else {
                " (*)"
            };
            result.push_str(&format!(
                "{}{connector}{} {}{marker}\n",
                frame.prefix,
                frame.arrow,
                self.nodes.node_at(frame.index).id()
            ));

            if frame.expand {
                let child_prefix = if frame.is_last {
                    format!("{}    ", frame.prefix)
                } else {
                    format!("{}│   ", frame.prefix)
                };
                self.push_tree_children(
                    frame.index,
                    Some(frame.parent),
                    &child_prefix,
                    &mut visited,
                    &mut stack,
                );
            }
        }
        result
    }

    /// Push the children of `index` so the first child is popped first.
    fn push_tree_children(
        &self,
        index: usize,
        parent: Option<usize>,
        prefix: &str,
        visited: &mut HashSet<usize>,
        stack: &mut Vec<TreeFrame>,
    ) {
        let children: Vec<(usize, &'static str)> = self
            .adjacency
            .dependencies(index)
            .iter()
            .map(|&i| (i, "→"))
            .chain(self.adjacency.dependents(index).iter().map(|&i| (i, "←")))
            .filter(|&(i, _)| Some(i) != parent)
            .collect();

        // Expand each child only once, at its first occurrence.
        let frames: Vec<TreeFrame> = children
            .iter()
            .enumerate()
            .map(|(i, &(child, arrow))| TreeFrame {
                index: child,
                parent: index,
                prefix: prefix.to_string(),
                is_last: i == children.len() - 1,
                arrow,
                expand: visited.insert(child),
            })
            .collect();
        stack.extend(frames.into_iter().rev());
    }
}

/// One pending line of [`DependencyGraph::to_tree_string`].
struct TreeFrame {
    index: usize,
    parent: usize,
    prefix: String,
    is_last: bool,
    arrow: &'static str,
    expand: bool,
}
