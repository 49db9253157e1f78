//! Global constants used throughout depview.
//!
//! Timeouts, retry parameters and defaults shared by the config, source and
//! CLI modules.

use std::time::Duration;

/// Namespace assumed for bare object names on the command line.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default interval between refreshes in `depview watch` (5 seconds).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Default timeout for one request to the object-list endpoint (30 seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Starting delay for exponential backoff between endpoint retries (100ms).
pub const STARTING_BACKOFF_DELAY_MS: u64 = 100;

/// Maximum backoff delay between endpoint retries (2 seconds).
pub const MAX_BACKOFF_DELAY_MS: u64 = 2_000;

/// Number of retries after the first failed endpoint request.
pub const MAX_ENDPOINT_RETRIES: usize = 3;

/// Number of "did you mean" candidates shown for an unknown object.
pub const SUGGESTION_LIMIT: usize = 3;

/// Environment variable overriding the global config file location.
pub const CONFIG_PATH_ENV: &str = "DEPVIEW_CONFIG";

/// Environment variable disabling spinners.
pub const NO_PROGRESS_ENV: &str = "DEPVIEW_NO_PROGRESS";

/// Spinner tick interval.
pub const SPINNER_TICK: Duration = Duration::from_millis(100);
