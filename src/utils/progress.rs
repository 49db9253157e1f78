//! Spinners for network fetches.
//!
//! Spinners draw on stderr, so stdout stays clean for `--format json` and
//! pipes. They are hidden when:
//! - `--no-progress` or `--quiet` is passed
//! - the `DEPVIEW_NO_PROGRESS` environment variable is set
//! - stderr is not a terminal

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::io::IsTerminal;

use crate::constants::{NO_PROGRESS_ENV, SPINNER_TICK};

/// Whether the environment asks for progress output to be suppressed.
#[must_use]
pub fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some() || !std::io::stderr().is_terminal()
}

/// A spinner with depview styling.
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Create a spinner; `enabled = false` yields a hidden one.
    ///
    /// The environment can still hide an enabled spinner, see
    /// [`is_progress_disabled`].
    #[must_use]
    pub fn new_spinner(enabled: bool) -> Self {
        let bar = if !enabled || is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(SPINNER_TICK);
            bar
        };
        Self {
            inner: bar,
        }
    }

    /// Set the message shown next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Stop the spinner and erase it.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }

    /// Whether the spinner draws nothing.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}
