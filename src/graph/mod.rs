//! Dependency graph resolution for GitOps objects.
//!
//! Objects (Terraform objects, Kustomizations, ...) declare `dependsOn`
//! references to each other by name and optional namespace. This module
//! answers the questions a dependency view asks about one snapshot of those
//! objects:
//!
//! - [`get_neighbors`] - objects directly connected to one object, both directions
//! - [`get_reachable_graph`] / [`DependencyGraph::reachable_from`] - the whole
//!   connected component, start object first, annotated for display
//! - [`DependencyGraph::apply_order`] - an order in which every object comes
//!   after its dependencies, or the cycle that prevents one
//!
//! Missing start objects, dangling references and isolated objects are not
//! errors: they produce empty or partial results.
//!
//! # Example
//!
//! ```rust
//! use depview_cli::core::ObjectRef;
//! use depview_cli::graph::{DependsOnRef, GraphNode, NodeMap, get_reachable_graph};
//!
//! let map = NodeMap::from_nodes([
//!     GraphNode::new("default", "a"),
//!     GraphNode::new("default", "b").depends_on(DependsOnRef::new("a")),
//!     GraphNode::new("default", "c").depends_on(DependsOnRef::new("b")),
//! ])?;
//!
//! let graph = get_reachable_graph(&map, &ObjectRef::new("default", "c"));
//! assert_eq!(graph.len(), 3);
//! assert!(graph[0].is_current_node);
//! # Ok::<(), depview_cli::core::DepviewError>(())
//! ```

mod adjacency;
mod dependency_graph;
mod neighbors;
mod node;
mod node_map;
mod order;
mod reachability;

pub use adjacency::Adjacency;
pub use dependency_graph::DependencyGraph;
pub use neighbors::get_neighbors;
pub use node::{DependsOnRef, GraphNode};
pub use node_map::NodeMap;
pub use reachability::{AnnotatedNode, get_reachable_graph};
