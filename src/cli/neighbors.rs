//! `depview neighbors`: direct dependencies and dependents of an object.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandContext, SourceArgs, object_not_found, validate_format};
use crate::core::ObjectRef;
use crate::graph::{DependencyGraph, GraphNode, NodeMap};

/// Show the direct dependencies and dependents of an object.
#[derive(Args, Debug)]
pub struct NeighborsCommand {
    /// Object, `namespace/name` or `name`
    object: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl NeighborsCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        validate_format(&self.format, &["text", "json"])?;
        let object = ctx.parse_ref(&self.object)?;
        let source = self.source.resolve(&ctx.config)?;

        let nodes = ctx.load_nodes(&source).await?;
        print!("{}", render_neighbors(&nodes, &object, self.format == "json")?);
        Ok(())
    }
}

/// Render the neighbors of `object`.
///
/// JSON output is the id list in resolver order: dependencies first, then
/// dependents, with repeats for mutual dependencies.
pub fn render_neighbors(nodes: &NodeMap, object: &ObjectRef, json: bool) -> Result<String> {
    let Some(node) = nodes.get_ref(object) else {
        return Err(object_not_found(nodes, object).into());
    };
    let graph = DependencyGraph::new(nodes);

    if json {
        let ids: Vec<String> = graph.neighbors_of(node).iter().map(|n| n.id()).collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&ids)?));
    }

    let dependencies = graph.dependencies_of(object);
    let dependents = graph.dependents_of(object);
    if dependencies.is_empty() && dependents.is_empty() {
        return Ok("No dependencies\n".to_string());
    }

    let mut out = format!("{}\n", object.to_string().bold());
    push_section(&mut out, "Depends on", "→", &dependencies);
    push_section(&mut out, "Required by", "←", &dependents);
    Ok(out)
}

fn push_section(out: &mut String, title: &str, arrow: &str, nodes: &[&GraphNode]) {
    if nodes.is_empty() {
        return;
    }
    out.push_str(&format!("  {title}:\n"));
    for node in nodes {
        out.push_str(&format!("    {arrow} {}\n", node.id()));
    }
}
