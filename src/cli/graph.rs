//! `depview graph`: the connected component reachable from an object.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandContext, SourceArgs, object_not_found, validate_format};
use crate::core::ObjectRef;
use crate::graph::{AnnotatedNode, DependencyGraph, NodeMap};

const VALID_FORMATS: &[&str] = &["tree", "text", "json"];

/// How a reachable graph is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Box-drawing tree rooted at the start object.
    Tree,
    /// One line per object with its dependents.
    Text,
    /// JSON array of annotated objects.
    Json,
}

impl GraphFormat {
    /// Parse a `--format` value.
    pub fn parse(format: &str) -> Result<Self> {
        validate_format(format, VALID_FORMATS)?;
        Ok(match format {
            "text" => Self::Text,
            "json" => Self::Json,
            _ => Self::Tree,
        })
    }
}

/// Show every object connected to an object.
#[derive(Args, Debug)]
pub struct GraphCommand {
    /// Start object, `namespace/name` or `name`
    object: String,

    /// Output format (tree, text, json)
    #[arg(long, default_value = "tree")]
    format: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl GraphCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let format = GraphFormat::parse(&self.format)?;
        let start = ctx.parse_ref(&self.object)?;
        let source = self.source.resolve(&ctx.config)?;

        let nodes = ctx.load_nodes(&source).await?;
        print!("{}", render_graph(&nodes, &start, format)?);
        Ok(())
    }
}

/// Render the reachable graph of `start`.
///
/// Fails with `ObjectNotFound` when `start` is not in the snapshot. A start
/// object with no connections renders as "No dependencies" (`[]` in JSON).
pub fn render_graph(nodes: &NodeMap, start: &ObjectRef, format: GraphFormat) -> Result<String> {
    if !nodes.contains(&start.id()) {
        return Err(object_not_found(nodes, start).into());
    }

    let graph = DependencyGraph::new(nodes);
    let mut reachable = graph.reachable_from(start);
    tracing::debug!("{} objects reachable from {}", reachable.len(), start);

    if reachable.is_empty() {
        return Ok(match format {
            GraphFormat::Json => "[]\n".to_string(),
            _ => "No dependencies\n".to_string(),
        });
    }

    Ok(match format {
        GraphFormat::Tree => graph.to_tree_string(start),
        GraphFormat::Text => {
            reachable.sort_by(|a, b| a.id.cmp(&b.id));
            render_text(&reachable)
        }
        GraphFormat::Json => {
            reachable.sort_by(|a, b| a.id.cmp(&b.id));
            format!("{}\n", serde_json::to_string_pretty(&reachable)?)
        }
    })
}

fn render_text(reachable: &[AnnotatedNode<'_>]) -> String {
    let mut out = String::new();
    for entry in reachable {
        let id = if entry.is_current_node {
            format!("{} {}", entry.id.bold(), "(current)".cyan())
        } else {
            entry.id.clone()
        };
        out.push_str(&id);
        if !entry.parent_ids.is_empty() {
            out.push_str(&format!("  {} {}", "←".dimmed(), entry.parent_ids.join(", ")));
        }
        out.push('\n');
    }
    out
}
