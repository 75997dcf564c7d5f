//! Domain entities
//!
//! Core business objects of header checking: signatures, detections,
//! and the per-file records produced by a run.

mod file_record;
mod file_signature;

pub use file_record::{Detection, FileRecord, Status, declared_extension};
pub use file_signature::{SignatureEntry, SignatureSpec};
