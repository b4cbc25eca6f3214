//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with standard styling, hidden unless enabled.
pub fn create_spinner(message: &'static str, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
            .expect("spinner template is valid"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Percentage of space saved by compression, negative when the output grew.
pub fn space_savings(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}
