//! Check summary DTO

use crate::domain::entities::{FileRecord, Status};
use std::path::PathBuf;
use std::time::Duration;

/// A file that could not be processed or moved
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a check run
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// Directory that was checked
    pub root: PathBuf,
    /// Every classified file, in processing order
    pub records: Vec<FileRecord>,
    /// Files skipped under [`FailurePolicy::Isolate`](super::FailurePolicy);
    /// they have no entry in `records`
    pub failures: Vec<FileFailure>,
    /// Where the report was written
    pub report_path: Option<PathBuf>,
    /// Whether the run stopped early on request
    pub cancelled: bool,
    pub duration: Duration,
}

impl CheckSummary {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            records: Vec::new(),
            failures: Vec::new(),
            report_path: None,
            cancelled: false,
            duration: Duration::ZERO,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.records.iter().filter(|r| r.status() == status).count()
    }

    /// Files that ended up in a bucket
    pub fn moved(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.destination().is_some())
            .count()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Checked {} files in {:.2}s\n",
            self.records.len(),
            self.duration.as_secs_f64()
        );
        for status in Status::ALL {
            summary.push_str(&format!("  - {}: {}\n", status, self.count(status)));
        }
        summary.push_str(&format!("Moved: {}\n", self.moved()));
        if !self.failures.is_empty() {
            summary.push_str(&format!("\n{} files failed\n", self.failures.len()));
        }
        if self.cancelled {
            summary.push_str("Run was cancelled before all files were checked\n");
        }
        summary
    }
}
