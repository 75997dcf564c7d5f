//! Data Transfer Objects

mod check_options;
mod check_summary;

pub use check_options::{CheckOptions, FailurePolicy};
pub use check_summary::{CheckSummary, FileFailure};
