//! hdrcheck - File header checker
//!
//! Detects each file's real format from its magic bytes, compares it with
//! the extension and sorts the file into `OK/`, `Mismatch/` or `Corrupted/`.
//!
//! ```
//! use hdrcheck::domain::services::FormatDetector;
//!
//! let detector = FormatDetector::default();
//! let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
//! assert_eq!(detector.detect_bytes(&png).as_deref(), Some("PNG"));
//! ```

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{CheckOptions, CheckSummary, FailurePolicy};
pub use application::{CancellationToken, CheckDirectoryUseCase, CheckEvent, spawn_check};
pub use domain::entities::{Detection, FileRecord, SignatureEntry, Status};
pub use domain::services::{FormatDetector, SignatureRegistry, classify, natural_cmp};
