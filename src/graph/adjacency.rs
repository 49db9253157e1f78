//! Precomputed adjacency over a [`NodeMap`].
//!
//! Built once per snapshot in O(n + e). Indices are node map positions.

use super::NodeMap;

/// Outgoing and incoming edges of every node in a [`NodeMap`].
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    /// Resolved `dependsOn` targets in declaration order; repeats kept.
    outgoing: Vec<Vec<usize>>,
    /// Dependents in node map order, each listed once.
    incoming: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Resolve every `dependsOn` reference of `nodes` against `nodes`.
    #[must_use]
    pub fn build(nodes: &NodeMap) -> Self {
        let mut outgoing = vec![Vec::new(); nodes.len()];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];

        for (from, node) in nodes.iter().enumerate() {
            for target_id in node.dependency_ids() {
                let Some(to) = nodes.index_of(&target_id) else {
                    tracing::trace!("Dropping dangling reference {} -> {}", node.id(), target_id);
                    continue;
                };
                outgoing[from].push(to);
                // Sources are visited in ascending order, so a repeat can only be the last entry.
                if incoming[to].last() != Some(&from) {
                    incoming[to].push(from);
                }
            }
        }

        Self {
            outgoing,
            incoming,
        }
    }

    /// Nodes `index` depends on.
    #[must_use]
    pub fn dependencies(&self, index: usize) -> &[usize] {
        &self.outgoing[index]
    }

    /// Nodes depending on `index`.
    #[must_use]
    pub fn dependents(&self, index: usize) -> &[usize] {
        &self.incoming[index]
    }

    /// Dependencies followed by dependents, as [`get_neighbors`](super::get_neighbors) orders them.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.outgoing[index].iter().chain(self.incoming[index].iter()).copied()
    }

    /// Number of resolved `dependsOn` references.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }
}
