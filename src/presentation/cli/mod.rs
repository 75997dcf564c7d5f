//! CLI module

mod commands;
mod progress;
mod render;

pub use commands::{Cli, Commands, SortOrder};
pub use progress::ProgressReporter;
pub use render::{print_records, print_signatures, print_summary, status_style};
