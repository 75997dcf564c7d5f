//! Persistence adapters
//!
//! Moving files into buckets and writing the check report.

mod local_file_mover;
mod report_file;

pub use local_file_mover::LocalFileMover;
pub use report_file::{render_report, write_report};
