//! Integration test suite for depview
//!
//! End-to-end tests that run the compiled `depview` binary against object
//! lists on disk and a local mock endpoint.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **graph_command**: `depview graph` output formats and empty results
//! - **neighbors_command**: `depview neighbors`
//! - **order_command**: `depview order` and cycle reporting
//! - **error_reporting**: user-facing errors and suggestions
//! - **endpoint_source**: fetching from an HTTP endpoint, auth and retries
//! - **global_config**: config file defaults and overrides

#[path = "../common/mod.rs"]
mod common;

mod error_reporting;
mod global_config;
mod order_command;
