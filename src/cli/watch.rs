//! `depview watch`: keep the graph of an object on screen while it changes.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use colored::Colorize;
use tokio::time::MissedTickBehavior;

use super::common::{CommandContext, SourceArgs};
use super::graph::{GraphFormat, render_graph};
use crate::core::ObjectRef;
use crate::source::ObjectSource;

/// Re-render the graph of an object whenever it changes.
#[derive(Args, Debug)]
pub struct WatchCommand {
    /// Start object, `namespace/name` or `name`
    object: String,

    /// Seconds between refreshes (default: `poll_interval_secs` from config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,

    /// Stop after this many refreshes
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    count: Option<u64>,

    /// Output format (tree, text, json)
    #[arg(long, default_value = "tree")]
    format: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl WatchCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let format = GraphFormat::parse(&self.format)?;
        let start = ctx.parse_ref(&self.object)?;
        let source = self.source.resolve(&ctx.config)?;
        let interval =
            self.interval.map_or_else(|| ctx.config.poll_interval(), Duration::from_secs);

        let watcher = Watcher {
            ctx,
            source: &source,
            start: &start,
            format,
        };
        watcher.run(interval, self.count, &mut std::io::stdout(), tokio::signal::ctrl_c()).await
    }
}

struct Watcher<'a> {
    ctx: &'a CommandContext,
    source: &'a ObjectSource,
    start: &'a ObjectRef,
    format: GraphFormat,
}

impl Watcher<'_> {
    /// Refresh every `interval` until `shutdown` resolves or `count` refreshes.
    ///
    /// `shutdown` is polled while waiting for a tick and while a refresh is
    /// in flight. A view is written only when it differs from the last one
    /// written. Failed refreshes are logged and the previous view stays
    /// current. JSON views are written without a header line so the output
    /// stays a stream of JSON documents.
    async fn run<F: Future>(
        &self,
        interval: Duration,
        count: Option<u64>,
        out: &mut impl Write,
        shutdown: F,
    ) -> Result<()> {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut shutdown = std::pin::pin!(shutdown);

        let mut last_view: Option<String> = None;
        let mut refreshes = 0u64;

        tracing::info!("Watching {} every {}s", self.start, interval.as_secs());
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = &mut shutdown => break,
            }

            refreshes += 1;
            let refreshed = tokio::select! {
                refreshed = self.refresh() => refreshed,
                _ = &mut shutdown => break,
            };

            match refreshed {
                Ok(view) if last_view.as_ref() == Some(&view) => {
                    tracing::debug!("Refresh {refreshes}: no change");
                }
                Ok(view) => {
                    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                    if self.format == GraphFormat::Json {
                        tracing::info!("[{stamp}] {} changed", self.start);
                    } else {
                        writeln!(out, "{}", format!("[{stamp}] {}", self.start).dimmed())?;
                    }
                    write!(out, "{view}")?;
                    out.flush()?;
                    last_view = Some(view);
                }
                Err(e) => tracing::warn!("Refresh {refreshes} failed: {e:#}"),
            }

            if count.is_some_and(|count| refreshes >= count) {
                return Ok(());
            }
        }

        tracing::info!("Interrupted, stopping watch");
        Ok(())
    }

    async fn refresh(&self) -> Result<String> {
        let nodes = self.ctx.load_nodes(self.source).await?;
        render_graph(&nodes, self.start, self.format)
    }
}
