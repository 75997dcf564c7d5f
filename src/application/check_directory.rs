//! Check directory use case
//!
//! Lists a directory, detects and classifies every file one at a time,
//! routes each into its bucket and writes the report.

use crate::application::cancellation::CancellationToken;
use crate::application::dto::{CheckOptions, CheckSummary, FailurePolicy, FileFailure};
use crate::core::error::CheckError;
use crate::domain::entities::{Detection, FileRecord, declared_extension};
use crate::domain::repositories::{FileMover, FileSource};
use crate::domain::services::{FileRouter, FormatDetector, classify, natural_cmp};
use crate::infrastructure::persistence::write_report;
use std::path::Path;
use std::time::Instant;

/// Notifications emitted while a check runs
#[derive(Debug, Clone)]
pub enum CheckEvent {
    /// Percentage of files processed, 0 to 100
    Progress(u8),
    /// A file has been classified (and moved, unless dry-running)
    FileChecked(FileRecord),
    /// The run completed or was cancelled
    Finished(CheckSummary),
    /// The run aborted
    Failed(String),
}

/// Check directory use case
pub struct CheckDirectoryUseCase<S: FileSource, M: FileMover> {
    detector: FormatDetector,
    source: S,
    mover: M,
}

impl<S: FileSource, M: FileMover> CheckDirectoryUseCase<S, M> {
    /// Creates a new check directory use case
    pub fn new(detector: FormatDetector, source: S, mover: M) -> Self {
        Self {
            detector,
            source,
            mover,
        }
    }

    pub fn detector(&self) -> &FormatDetector {
        &self.detector
    }

    /// Detects and classifies one file without moving it
    pub fn check_file(&self, path: &Path) -> Result<FileRecord, CheckError> {
        let inspect_err = |source| CheckError::Inspect {
            path: path.to_path_buf(),
            source,
        };

        let size = self.source.size(path).map_err(inspect_err)?;
        let detection = if size == 0 {
            Detection::Empty
        } else {
            let mut reader = self.source.open(path).map_err(inspect_err)?;
            self.detector.detect(&mut reader, size)
        };
        let status = classify(&declared_extension(path), &detection, size);

        tracing::debug!(
            "{}: detected {}, status {}",
            path.display(),
            detection.label(),
            status
        );
        Ok(FileRecord::new(path.to_path_buf(), size, detection, status))
    }

    /// Executes the check
    ///
    /// Files are handled strictly in sequence, in natural order of their
    /// names. `cancel` is honoured between files. A cancelled run still
    /// writes the report for the files already processed.
    pub fn execute<F>(
        &self,
        dir: &Path,
        options: &CheckOptions,
        cancel: &CancellationToken,
        mut on_event: F,
    ) -> Result<CheckSummary, CheckError>
    where
        F: FnMut(CheckEvent),
    {
        let start_time = Instant::now();
        let router = FileRouter::new(dir);

        let mut files = self
            .source
            .list_files(dir)
            .map_err(|source| CheckError::ListDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
        let total = files.len();

        tracing::info!("Checking {} files in {}", total, dir.display());

        if !options.dry_run {
            router.prepare(&self.mover)?;
        }

        let mut summary = CheckSummary::new(dir.to_path_buf());
        if total == 0 {
            on_event(CheckEvent::Progress(100));
        }

        for (index, path) in files.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!("Check cancelled after {} of {} files", index, total);
                summary.cancelled = true;
                break;
            }

            match self.process(&router, path, options) {
                Ok(record) => {
                    on_event(CheckEvent::FileChecked(record.clone()));
                    summary.records.push(record);
                }
                Err(error) => {
                    if options.failure_policy == FailurePolicy::Abort {
                        return Err(error);
                    }
                    // Failed files stay out of `records` and the report
                    tracing::warn!("Skipping {}: {}", path.display(), error);
                    summary.failures.push(FileFailure {
                        path: path.clone(),
                        message: error.to_string(),
                    });
                }
            }

            on_event(CheckEvent::Progress(percent(index + 1, total)));
        }

        if let Some(report_path) = &options.report_path {
            write_report(report_path, &summary.records).map_err(|source| {
                CheckError::Report {
                    path: report_path.clone(),
                    source,
                }
            })?;
            summary.report_path = Some(report_path.clone());
        }

        summary.duration = start_time.elapsed();

        tracing::info!(
            "Check complete: {} files, {} moved, {} failed in {:.2}s",
            summary.records.len(),
            summary.moved(),
            summary.failures.len(),
            summary.duration.as_secs_f64()
        );

        Ok(summary)
    }

    /// Classifies and routes one file
    fn process(
        &self,
        router: &FileRouter,
        path: &Path,
        options: &CheckOptions,
    ) -> Result<FileRecord, CheckError> {
        let record = self.check_file(path)?;
        if options.dry_run {
            return Ok(record);
        }

        match router.route(&self.mover, path, record.status())? {
            Some(destination) => Ok(record.with_destination(destination)),
            None => Ok(record),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done * 100 / total).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_integer_share() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 66);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 0), 100);
    }
}
