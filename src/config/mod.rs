//! Configuration management for depview
//!
//! depview has a single, optional, user-wide configuration file:
//!
//! - Unix/macOS: `~/.depview/config.toml`
//! - Windows: `%LOCALAPPDATA%\depview\config.toml`
//!
//! Its location can be overridden with `--config <path>` or the
//! `DEPVIEW_CONFIG` environment variable. Command-line flags always win over
//! values from the file. See [`GlobalConfig`] for the keys.
//!
//! The configuration is loaded once per CLI invocation and passed down
//! explicitly; nothing reads it from global state.

mod global;

pub use global::GlobalConfig;
