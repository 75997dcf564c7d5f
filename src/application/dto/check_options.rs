//! Check options DTO

use std::path::PathBuf;

/// What to do when a single file cannot be opened or moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the run at the first failure
    #[default]
    Abort,
    /// Log the failure, record it in the summary and go on
    Isolate,
}

/// Options for checking a directory
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Where to write the text report (none = no report)
    pub report_path: Option<PathBuf>,
    /// Classify and report without moving anything
    pub dry_run: bool,
    /// Per-file failure handling
    pub failure_policy: FailurePolicy,
}

impl CheckOptions {
    /// Creates options that write the report to `report_path`
    pub fn new(report_path: impl Into<PathBuf>) -> Self {
        Self {
            report_path: Some(report_path.into()),
            ..Default::default()
        }
    }

    /// Disables moving files
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Keeps going past per-file failures
    pub fn keep_going(mut self) -> Self {
        self.failure_policy = FailurePolicy::Isolate;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
