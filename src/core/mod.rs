//! Core types for depview
//!
//! - [`error`] - [`DepviewError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`identity`] - composite ids ([`make_id`]) and [`ObjectRef`]
//!
//! Everything here is re-exported at `depview_cli::core` so callers rarely
//! name the submodules directly.

pub mod error;
pub mod identity;

pub use error::{DepviewError, ErrorContext, user_friendly_error};
pub use identity::{ObjectRef, make_id};
