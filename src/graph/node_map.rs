//! The universe of known objects for one computation.

use std::collections::HashMap;

use strsim::levenshtein;

use super::GraphNode;
use crate::core::{DepviewError, ObjectRef};

/// Maximum Levenshtein distance, as a percentage of the id length, for "did you mean" hints.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Mapping from composite id to [`GraphNode`].
///
/// Keys are unique and iteration follows insertion order, which is the order
/// objects appeared in the backend response. A node map is built once per
/// fetch and is read-only while graphs are computed over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMap {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
}

impl NodeMap {
    /// Create an empty node map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a node map, rejecting duplicate ids.
    pub fn from_nodes<I>(nodes: I) -> Result<Self, DepviewError>
    where
        I: IntoIterator<Item = GraphNode>,
    {
        let mut map = Self::new();
        for node in nodes {
            map.insert(node)?;
        }
        Ok(map)
    }

    /// Add a node at the end of the iteration order.
    pub fn insert(&mut self, node: GraphNode) -> Result<(), DepviewError> {
        let id = node.id();
        if self.index.contains_key(&id) {
            return Err(DepviewError::DuplicateNode {
                id,
            });
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Look up a node by composite id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Look up a node by (namespace, name).
    #[must_use]
    pub fn get_ref(&self, object: &ObjectRef) -> Option<&GraphNode> {
        self.get(&object.id())
    }

    /// Whether a node with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a node in iteration order.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node at a position previously returned by [`index_of`](Self::index_of).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn node_at(&self, index: usize) -> &GraphNode {
        &self.nodes[index]
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the map has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GraphNode> {
        self.nodes.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = String> + '_ {
        self.nodes.iter().map(GraphNode::id)
    }

    /// Up to `limit` known ids closest to `id`, best match first.
    #[must_use]
    pub fn similar_ids(&self, id: &str, limit: usize) -> Vec<String> {
        let max_distance = id.len() * SIMILARITY_THRESHOLD_PERCENT / 100;
        let mut scored: Vec<(String, usize)> = self
            .ids()
            .map(|candidate| {
                let distance = levenshtein(id, &candidate);
                (candidate, distance)
            })
            .filter(|(_, distance)| *distance <= max_distance)
            .collect();

        // Stable sort keeps insertion order among equal distances.
        scored.sort_by_key(|(_, distance)| *distance);
        scored.into_iter().take(limit).map(|(candidate, _)| candidate).collect()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = &'a GraphNode;
    type IntoIter = std::slice::Iter<'a, GraphNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
