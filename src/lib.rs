//! depview - dependency graphs for GitOps objects
//!
//! A GitOps backend manages objects (Terraform workspaces, Kustomizations)
//! that declare `dependsOn` references to each other. depview loads a
//! snapshot of those objects and answers questions about the graph they form:
//! which objects are connected to a given one, what its direct neighbors are
//! and in what order the objects can be applied.
//!
//! # Architecture Overview
//!
//! - An object list is fetched from the backend endpoint or read from a file
//!   ([`source`]) and indexed by composite id `namespace/name` into a
//!   [`graph::NodeMap`].
//! - A [`graph::DependencyGraph`] borrows the map, precomputes adjacency and
//!   answers neighbor, reachability and ordering queries without mutating it.
//! - The [`cli`] renders those answers as trees, text or JSON.
//!
//! # Core Modules
//!
//! - [`core`] - object identity, error types and user-facing error rendering
//! - [`graph`] - node storage, neighbor resolution, reachability, apply order
//! - [`source`] - object-list decoding and the HTTP endpoint client
//! - [`config`] - the optional `~/.depview/config.toml`
//! - [`cli`] - command-line interface
//! - [`utils`] - terminal progress helpers
//!
//! # Example
//!
//! ```rust
//! use depview_cli::core::ObjectRef;
//! use depview_cli::graph::{DependsOnRef, GraphNode, NodeMap, get_reachable_graph};
//!
//! let nodes = NodeMap::from_nodes([
//!     GraphNode::new("infra", "vpc"),
//!     GraphNode::new("infra", "app").depends_on(DependsOnRef::new("vpc")),
//! ])?;
//!
//! let reachable = get_reachable_graph(&nodes, &ObjectRef::new("infra", "app"));
//! let ids: Vec<&str> = reachable.iter().map(|n| n.id.as_str()).collect();
//! assert_eq!(ids, vec!["infra/app", "infra/vpc"]);
//! # Ok::<(), depview_cli::core::DepviewError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod graph;
pub mod source;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
