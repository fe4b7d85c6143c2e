use indicatif::{ProgressBar, ProgressStyle};

/// Get a standardized spinner style for walks whose length is unknown upfront
pub fn progress_bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}: {pos} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Spinner when enabled, hidden bar otherwise
pub fn new_spinner(enabled: bool, msg: &'static str) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    ProgressBar::new_spinner()
        .with_style(progress_bar_style())
        .with_message(msg)
}
