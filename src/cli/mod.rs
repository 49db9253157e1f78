//! Command-line interface for depview.
//!
//! Every command loads one object-list snapshot (from `--file`, `--url` or the
//! configured endpoint), builds a [`DependencyGraph`](crate::graph::DependencyGraph)
//! over it and prints a view of it:
//!
//! - `graph` - the connected component reachable from an object
//! - `neighbors` - the direct dependencies and dependents of an object
//! - `order` - an apply order for the snapshot or one component
//! - `watch` - `graph`, re-rendered whenever the snapshot changes
//!
//! # Global Options
//!
//! - `--verbose` - debug logging
//! - `--quiet` - errors only, no spinners
//! - `--no-progress` - no spinners
//! - `--config` - path to the config file
//!
//! # Example
//!
//! ```bash
//! depview graph flux-system/apps --file objects.json
//! depview neighbors vpc --url https://gitops.example.com/v1/objects --format json
//! depview order --file objects.yaml
//! depview watch apps --interval 10
//! ```

pub mod common;
mod graph;
mod neighbors;
mod order;
mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;
use common::CommandContext;

/// Settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` defers to `RUST_LOG` or `warn`.
    pub log_level: Option<String>,
    /// Suppress spinners.
    pub no_progress: bool,
    /// Explicit config file path.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a config with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the fmt subscriber on stderr.
    ///
    /// Does nothing if a subscriber is already set, so tests that call
    /// [`Cli::execute_with_config`] repeatedly do not fail.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Main CLI structure for depview.
#[derive(Parser, Debug)]
#[command(
    name = "depview",
    about = "Inspect dependency graphs of GitOps-managed objects",
    version,
    long_about = "depview loads the objects a GitOps backend manages and shows how they \
                  depend on each other: reachable graphs, direct neighbors and apply order."
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file (default: ~/.depview/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable spinners
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every object connected to an object
    Graph(graph::GraphCommand),

    /// Show the direct dependencies and dependents of an object
    Neighbors(neighbors::NeighborsCommand),

    /// Print an order in which objects can be applied
    Order(order::OrderCommand),

    /// Re-render the graph of an object whenever it changes
    Watch(watch::WatchCommand),
}

impl Cli {
    /// Execute with settings derived from the global flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress || self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Execute with explicit settings.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let global = GlobalConfig::load_with_optional(config.config_path.clone()).await?;
        let ctx = CommandContext::new(global, !config.no_progress);

        match self.command {
            Commands::Graph(cmd) => cmd.execute(&ctx).await,
            Commands::Neighbors(cmd) => cmd.execute(&ctx).await,
            Commands::Order(cmd) => cmd.execute(&ctx).await,
            Commands::Watch(cmd) => cmd.execute(&ctx).await,
        }
    }
}
