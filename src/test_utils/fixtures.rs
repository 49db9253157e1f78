//! Canonical snapshots for tests.
//!
//! [`SnapshotFixture`] builds the small graphs most tests reason about;
//! [`ObjectListFixture`] writes object lists to disk the way the backend
//! serves them, for file-source and CLI tests.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::graph::{DependsOnRef, GraphNode, NodeMap};

/// Named snapshots, all in the `default` namespace unless noted.
pub struct SnapshotFixture;

impl SnapshotFixture {
    /// `c → b → a`: every object depends on the previous one.
    pub fn linear_chain() -> NodeMap {
        Self::build([
            GraphNode::new("default", "a"),
            GraphNode::new("default", "b").depends_on(DependsOnRef::new("a")),
            GraphNode::new("default", "c").depends_on(DependsOnRef::new("b")),
        ])
    }

    /// `x` with no references, next to an unrelated `b → c` pair.
    pub fn isolated() -> NodeMap {
        Self::build([
            GraphNode::new("default", "x"),
            GraphNode::new("default", "b").depends_on(DependsOnRef::new("c")),
            GraphNode::new("default", "c"),
        ])
    }

    /// `b → a`, `c → a`, `d → b`.
    pub fn diamond() -> NodeMap {
        Self::build([
            GraphNode::new("default", "a"),
            GraphNode::new("default", "b").depends_on(DependsOnRef::new("a")),
            GraphNode::new("default", "c").depends_on(DependsOnRef::new("a")),
            GraphNode::new("default", "d").depends_on(DependsOnRef::new("b")),
        ])
    }

    /// `e → ghost` and `e → a`, where `ghost` is not in the snapshot.
    pub fn dangling() -> NodeMap {
        Self::build([
            GraphNode::new("default", "a"),
            GraphNode::new("default", "e")
                .depends_on(DependsOnRef::new("ghost"))
                .depends_on(DependsOnRef::new("a")),
        ])
    }

    /// `app` in `apps` depending on `vpc` and `dns` in `infra`.
    pub fn cross_namespace() -> NodeMap {
        Self::build([
            GraphNode::new("infra", "vpc").with_kind("Terraform"),
            GraphNode::new("infra", "dns")
                .with_kind("Terraform")
                .depends_on(DependsOnRef::new("vpc")),
            GraphNode::new("apps", "app")
                .with_kind("Kustomization")
                .depends_on(DependsOnRef::namespaced("infra", "vpc"))
                .depends_on(DependsOnRef::namespaced("infra", "dns")),
        ])
    }

    fn build<const N: usize>(nodes: [GraphNode; N]) -> NodeMap {
        match NodeMap::from_nodes(nodes) {
            Ok(map) => map,
            Err(e) => panic!("fixture has duplicate ids: {e}"),
        }
    }
}

/// An object list file as the backend serves it.
#[derive(Clone, Debug)]
pub struct ObjectListFixture {
    pub name: String,
    pub content: String,
}

impl ObjectListFixture {
    /// `{"objects": [...]}` envelope with a `vpc ← db ← app` chain, a
    /// `cache` object used by `app` and an unrelated `monitoring`.
    pub fn envelope() -> Self {
        let objects = json!({
            "objects": [
                { "namespace": "infra", "name": "vpc", "kind": "Terraform", "clusterName": "mgmt" },
                { "namespace": "infra", "name": "db", "kind": "Terraform",
                  "dependsOn": [{ "name": "vpc" }] },
                { "namespace": "infra", "name": "cache", "kind": "Terraform" },
                { "namespace": "apps", "name": "app", "kind": "Kustomization",
                  "dependsOn": [
                      { "name": "db", "namespace": "infra" },
                      { "name": "cache", "namespace": "infra" }
                  ] },
                { "namespace": "ops", "name": "monitoring", "kind": "Kustomization" }
            ],
            "errors": []
        });
        Self {
            name: "objects.json".to_string(),
            content: objects.to_string(),
        }
    }

    /// Bare array where `a` and `b` depend on each other.
    pub fn cyclic() -> Self {
        let objects = json!([
            { "namespace": "default", "name": "a", "dependsOn": [{ "name": "b" }] },
            { "namespace": "default", "name": "b", "dependsOn": [{ "name": "a" }] }
        ]);
        Self {
            name: "cyclic.json".to_string(),
            content: objects.to_string(),
        }
    }

    /// Bare JSON array with a `vpc ← app` pair in `infra`.
    pub fn pair() -> Self {
        let objects = json!([
            { "namespace": "infra", "name": "vpc" },
            { "namespace": "infra", "name": "app", "dependsOn": [{ "name": "vpc" }] }
        ]);
        Self {
            name: "pair.json".to_string(),
            content: objects.to_string(),
        }
    }

    /// YAML envelope with a `vpc ← app` pair.
    pub fn yaml() -> Self {
        Self {
            name: "objects.yaml".to_string(),
            content: "\
objects:
  - namespace: infra
    name: vpc
  - namespace: infra
    name: app
    dependsOn:
      - name: vpc
"
            .to_string(),
        }
    }

    /// Write the fixture into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.name);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }
}
