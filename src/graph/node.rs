//! Graph node model.
//!
//! A [`GraphNode`] is one object from the backend's object list (a Terraform
//! object, a Kustomization, ...) together with the `dependsOn` references it
//! declares. Nodes are plain data: traversal-specific annotations such as
//! "is this the start node" live on
//! [`AnnotatedNode`](crate::graph::AnnotatedNode), never on the node itself.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{ObjectRef, make_id};

/// A `dependsOn` entry naming another object.
///
/// When `namespace` is absent (or empty) the reference points into the
/// declaring object's own namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependsOnRef {
    /// Name of the referenced object.
    pub name: String,
    /// Namespace of the referenced object, if it differs from the owner's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl DependsOnRef {
    /// Reference an object in the owner's namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Reference an object in an explicit namespace.
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// Namespace this reference resolves to for an owner in `owner_namespace`.
    #[must_use]
    pub fn resolved_namespace<'s>(&'s self, owner_namespace: &'s str) -> &'s str {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => ns,
            _ => owner_namespace,
        }
    }

    /// Composite id of the referenced object.
    #[must_use]
    pub fn target_id(&self, owner_namespace: &str) -> String {
        make_id(self.resolved_namespace(owner_namespace), &self.name)
    }

    /// Whether this reference, declared in `owner_namespace`, points at `target`.
    #[must_use]
    pub fn points_at(&self, owner_namespace: &str, target: &ObjectRef) -> bool {
        self.name == target.name && self.resolved_namespace(owner_namespace) == target.namespace
    }
}

/// One object participating in dependency relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Namespace of the object.
    pub namespace: String,
    /// Name of the object.
    pub name: String,
    /// Object kind as reported by the backend (`Terraform`, `Kustomization`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Cluster the object lives on, for multi-cluster object lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    /// Declared dependencies, in declaration order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub depends_on: Vec<DependsOnRef>,
}

impl GraphNode {
    /// Create a node without dependencies.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            kind: None,
            cluster_name: None,
            depends_on: Vec::new(),
        }
    }

    /// Set the object kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Append a `dependsOn` entry.
    #[must_use]
    pub fn depends_on(mut self, reference: DependsOnRef) -> Self {
        self.depends_on.push(reference);
        self
    }

    /// Composite `namespace/name` id.
    #[must_use]
    pub fn id(&self) -> String {
        make_id(&self.namespace, &self.name)
    }

    /// The (namespace, name) pair of this node.
    #[must_use]
    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef::new(self.namespace.clone(), self.name.clone())
    }

    /// Ids of every declared dependency, resolved against this node's namespace.
    ///
    /// Dangling references are included; callers drop them on lookup.
    pub fn dependency_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.depends_on.iter().map(|dep| dep.target_id(&self.namespace))
    }

    /// Whether any `dependsOn` entry of this node points at `target`.
    #[must_use]
    pub fn declares_dependency_on(&self, target: &ObjectRef) -> bool {
        self.depends_on.iter().any(|dep| dep.points_at(&self.namespace, target))
    }
}

// The backend sends `"dependsOn": null` for objects without dependencies.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DependsOnRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DependsOnRef>>::deserialize(deserializer)?.unwrap_or_default())
}
