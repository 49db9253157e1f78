//! Object sources: where the object list comes from.
//!
//! An object list is what the backend's list endpoint returns, either a bare
//! array of objects or an `{"objects": [...]}` envelope, in JSON or YAML:
//!
//! ```json
//! {
//!   "objects": [
//!     { "namespace": "flux-system", "name": "vpc" },
//!     { "namespace": "flux-system", "name": "app", "dependsOn": [{ "name": "vpc" }] }
//!   ]
//! }
//! ```
//!
//! Fields other than `name`, `namespace`, `dependsOn`, `kind` and
//! `clusterName` are ignored. An envelope must carry `objects` (`null` reads
//! as empty). Every load builds a fresh [`NodeMap`].

mod endpoint;

pub use endpoint::EndpointSource;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

use crate::core::DepviewError;
use crate::graph::{GraphNode, NodeMap};

/// Encoding of an object list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// JSON array or envelope.
    Json,
    /// YAML sequence or envelope.
    Yaml,
}

impl ListFormat {
    /// Pick the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(deserialize_with = "null_as_empty")]
    objects: Vec<GraphNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GraphNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GraphNode>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an object list and build its node map.
///
/// A top-level sequence decodes as a bare list, anything else as an
/// envelope, so decode errors point at the offending object. `origin` names
/// the file or URL in error messages.
pub fn parse_object_list(
    content: &str,
    format: ListFormat,
    origin: &str,
) -> Result<NodeMap, DepviewError> {
    let nodes = match format {
        ListFormat::Json if content.trim_start().starts_with('[') => {
            serde_json::from_str::<Vec<GraphNode>>(content).map_err(|e| parse_error(origin, e))?
        }
        ListFormat::Json => {
            serde_json::from_str::<Envelope>(content).map_err(|e| parse_error(origin, e))?.objects
        }
        ListFormat::Yaml if is_yaml_sequence(content) => {
            serde_yaml::from_str::<Vec<GraphNode>>(content).map_err(|e| parse_error(origin, e))?
        }
        ListFormat::Yaml => {
            serde_yaml::from_str::<Envelope>(content).map_err(|e| parse_error(origin, e))?.objects
        }
    };

    tracing::debug!("Decoded {} objects from {}", nodes.len(), origin);
    NodeMap::from_nodes(nodes)
}

fn is_yaml_sequence(content: &str) -> bool {
    serde_yaml::from_str::<serde_yaml::Value>(content).is_ok_and(|value| value.is_sequence())
}

fn parse_error(origin: &str, error: impl std::fmt::Display) -> DepviewError {
    DepviewError::ObjectListParse {
        origin: origin.to_string(),
        reason: error.to_string(),
    }
}

/// Where to load the object list from.
#[derive(Debug, Clone)]
pub enum ObjectSource {
    /// A JSON or YAML file on disk.
    File(PathBuf),
    /// The backend's object-list endpoint.
    Endpoint(EndpointSource),
}

impl ObjectSource {
    /// Load the object list and build a fresh node map.
    pub async fn load(&self) -> Result<NodeMap> {
        match self {
            Self::File(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read object list from {}", path.display()))?;
                let nodes = parse_object_list(
                    &content,
                    ListFormat::from_path(path),
                    &path.display().to_string(),
                )?;
                Ok(nodes)
            }
            Self::Endpoint(endpoint) => Ok(endpoint.fetch().await?),
        }
    }

    /// Human readable origin, for log lines and spinners.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Endpoint(endpoint) => endpoint.url.clone(),
        }
    }
}
