//! Discovery progress bar

use indicatif::{ProgressBar, ProgressStyle};

/// Create a percentage progress bar
///
/// Returns `None` if quiet mode is enabled.
pub fn create_progress_bar(quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    bar.set_message("Discovering Sentry resources...");
    Some(bar)
}

/// Move the bar to an absolute percentage
pub fn set_progress(bar: Option<&ProgressBar>, percent: u8) {
    if let Some(b) = bar {
        b.set_position(u64::from(percent.min(100)));
    }
}

/// Finish the bar with a message
pub fn finish_progress(bar: Option<ProgressBar>, message: &str) {
    if let Some(b) = bar {
        b.finish_with_message(message.to_string());
    }
}

/// Remove the bar without leaving output
pub fn clear_progress(bar: Option<ProgressBar>) {
    if let Some(b) = bar {
        b.finish_and_clear();
    }
}
