//! Common utilities shared by CLI commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::GlobalConfig;
use crate::constants::SUGGESTION_LIMIT;
use crate::core::{DepviewError, ObjectRef};
use crate::graph::NodeMap;
use crate::source::{EndpointSource, ObjectSource};
use crate::utils::ProgressBar;

/// Settings resolved once per invocation and handed to every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded global configuration
    pub config: GlobalConfig,
    /// Whether spinners may be shown
    pub show_progress: bool,
}

impl CommandContext {
    /// Build a context from an already loaded config.
    #[must_use]
    pub const fn new(config: GlobalConfig, show_progress: bool) -> Self {
        Self {
            config,
            show_progress,
        }
    }

    /// Parse a `namespace/name` or bare `name` reference.
    pub fn parse_ref(&self, reference: &str) -> Result<ObjectRef> {
        ObjectRef::parse_with_default(reference, &self.config.default_namespace)
            .map_err(anyhow::Error::from)
    }

    /// Load the object list, showing a spinner for endpoint fetches.
    pub async fn load_nodes(&self, source: &ObjectSource) -> Result<NodeMap> {
        let spinner = ProgressBar::new_spinner(
            self.show_progress && matches!(source, ObjectSource::Endpoint(_)),
        );
        spinner.set_message(format!("Fetching objects from {}", source.describe()));

        let result = source.load().await;
        spinner.finish_and_clear();

        let nodes =
            result.with_context(|| format!("Failed to load objects from {}", source.describe()))?;
        tracing::info!("Loaded {} objects from {}", nodes.len(), source.describe());
        Ok(nodes)
    }
}

/// Where a command reads its object list from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read the object list from a JSON or YAML file
    ///
    /// The file holds either an array of objects or an `{"objects": [...]}`
    /// envelope, as returned by the backend's list endpoint.
    #[arg(short = 'f', long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Fetch the object list from this endpoint URL
    ///
    /// Defaults to `endpoint` from the config file when neither `--file`
    /// nor `--url` is given.
    #[arg(short = 'u', long)]
    pub url: Option<String>,
}

impl SourceArgs {
    /// Pick the object source: `--file`, then `--url`, then the configured endpoint.
    pub fn resolve(&self, config: &GlobalConfig) -> Result<ObjectSource, DepviewError> {
        if let Some(path) = &self.file {
            return Ok(ObjectSource::File(path.clone()));
        }

        let url = self
            .url
            .clone()
            .or_else(|| config.endpoint.clone())
            .ok_or(DepviewError::NoObjectSource)?;
        Ok(ObjectSource::Endpoint(
            EndpointSource::new(url, config.request_timeout()).with_token(config.token.clone()),
        ))
    }
}

/// Reject output formats a command does not support.
pub fn validate_format(format: &str, valid: &[&str]) -> Result<(), DepviewError> {
    if valid.contains(&format) {
        Ok(())
    } else {
        Err(DepviewError::InvalidFormat {
            format: format.to_string(),
            valid: valid.join(", "),
        })
    }
}

/// Error for a start object missing from the snapshot, with close matches.
#[must_use]
pub fn object_not_found(nodes: &NodeMap, object: &ObjectRef) -> DepviewError {
    let id = object.id();
    DepviewError::ObjectNotFound {
        suggestions: nodes.similar_ids(&id, SUGGESTION_LIMIT),
        id,
    }
}
