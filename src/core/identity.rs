//! Object identity keying.
//!
//! Every object is addressed by the composite id `"{namespace}/{name}"`. The id
//! is the only key used by [`NodeMap`](crate::graph::NodeMap) and the graph
//! algorithms, so it is always derived through [`make_id`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DepviewError;

/// Build the composite id of an object.
///
/// Empty strings are accepted; equal inputs always yield equal ids.
///
/// ```rust
/// use depview_cli::core::make_id;
///
/// assert_eq!(make_id("flux-system", "infra"), "flux-system/infra");
/// assert_eq!(make_id("", "infra"), "/infra");
/// ```
#[must_use]
pub fn make_id(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

/// A (namespace, name) pair identifying one object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Kubernetes namespace of the object.
    pub namespace: String,
    /// Object name.
    pub name: String,
}

impl ObjectRef {
    /// Create a reference from its parts.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Composite id of the referenced object.
    #[must_use]
    pub fn id(&self) -> String {
        make_id(&self.namespace, &self.name)
    }

    /// Parse `namespace/name`, or a bare `name` placed in `default_namespace`.
    pub fn parse_with_default(s: &str, default_namespace: &str) -> Result<Self, DepviewError> {
        if s.contains('/') {
            return s.parse();
        }
        if s.is_empty() {
            return Err(invalid(s, "name is empty"));
        }
        Ok(Self::new(default_namespace, s))
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for ObjectRef {
    type Err = DepviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, name)) = s.split_once('/') else {
            return Err(invalid(s, "expected 'namespace/name'"));
        };
        if name.contains('/') {
            return Err(invalid(s, "too many '/' separators"));
        }
        if name.is_empty() {
            return Err(invalid(s, "name is empty"));
        }
        Ok(Self::new(namespace, name))
    }
}

fn invalid(reference: &str, reason: &str) -> DepviewError {
    DepviewError::InvalidObjectRef {
        reference: reference.to_string(),
        reason: reason.to_string(),
    }
}
