//! Verbosity-gated diagnostics and progress display
//!
//! There is no process-wide verbosity flag; a [`Reporter`] is constructed
//! from the CLI once and threaded through every component that emits
//! diagnostics. Output is purely informational and never alters control
//! flow.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Diagnostic reporter carrying the run's verbosity setting
#[derive(Clone, Copy, Debug, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    /// Create a reporter with the given verbosity
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether diagnostics are being emitted
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print a diagnostic message when verbose output is enabled
    // Diagnostics go to stderr so the terminal stays usable in quiet runs
    #[allow(clippy::print_stderr)]
    pub fn note(&self, message: &str) {
        if self.verbose {
            eprintln!("{message}");
        }
    }

    /// Create a progress bar, hidden unless verbose output is enabled
    pub fn bar(&self, length: u64, message: &'static str) -> ProgressBar {
        if !self.verbose {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(length);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(message);
        bar
    }
}
