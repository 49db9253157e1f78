//! `depview order`: an order in which objects can be applied.

use anyhow::Result;
use clap::Args;

use super::common::{CommandContext, SourceArgs, object_not_found, validate_format};
use crate::core::ObjectRef;
use crate::graph::{DependencyGraph, NodeMap};

/// Print an order in which objects can be applied.
#[derive(Args, Debug)]
pub struct OrderCommand {
    /// Limit the order to the component of this object
    object: Option<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl OrderCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        validate_format(&self.format, &["text", "json"])?;
        let start = self.object.as_deref().map(|object| ctx.parse_ref(object)).transpose()?;
        let source = self.source.resolve(&ctx.config)?;

        let nodes = ctx.load_nodes(&source).await?;
        print!("{}", render_order(&nodes, start.as_ref(), self.format == "json")?);
        Ok(())
    }
}

/// Render the apply order of the snapshot, or of the component of `start`.
///
/// Fails with `CircularDependency` when the objects cannot be ordered.
pub fn render_order(nodes: &NodeMap, start: Option<&ObjectRef>, json: bool) -> Result<String> {
    let graph = DependencyGraph::new(nodes);
    let ordered = match start {
        Some(start) if !nodes.contains(&start.id()) => {
            return Err(object_not_found(nodes, start).into());
        }
        Some(start) => graph.apply_order_for(start)?,
        None => graph.apply_order()?,
    };
    let ids: Vec<String> = ordered.iter().map(|node| node.id()).collect();

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&ids)?));
    }
    if ids.is_empty() {
        return Ok("No dependencies\n".to_string());
    }

    let width = ids.len().to_string().len();
    Ok(ids
        .iter()
        .enumerate()
        .map(|(i, id)| format!("{:>width$}. {id}\n", i + 1))
        .collect())
}
