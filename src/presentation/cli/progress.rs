//! Progress reporting for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Creates a percentage bar for a check run
    pub fn for_check() -> Self {
        let bar = ProgressBar::new(100);
        let style = ProgressStyle::with_template(
            "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}%",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message("Checking files...");

        Self { bar }
    }

    /// Sets the percentage shown
    pub fn update(&self, percent: u8) {
        self.bar.set_position(u64::from(percent.min(100)));
    }

    /// Shows the file currently being handled
    pub fn set_current(&self, name: &str) {
        self.bar.set_message(format!("Checked {}", name));
    }

    /// Finishes with a message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Removes the bar after a failure
    pub fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}
