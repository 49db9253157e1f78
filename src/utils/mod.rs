//! Terminal helpers.
//!
//! - [`progress`] - spinners shown while object lists are fetched

pub mod progress;

pub use progress::ProgressBar;
