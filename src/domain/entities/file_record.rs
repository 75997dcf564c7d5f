//! File record entity
//!
//! The per-file outcome of a check: what the header says, what the name
//! says, and the status that follows from the two.

use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of probing a file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The file has no bytes; nothing was read
    Empty,
    /// A format was identified
    Matched(String),
    /// No signature or fallback applied
    NoMatch,
    /// Reading the stream failed
    Faulted(String),
}

impl Detection {
    pub fn matched(&self) -> bool {
        matches!(self, Detection::Matched(_))
    }

    pub fn format_id(&self) -> Option<&str> {
        match self {
            Detection::Matched(id) => Some(id),
            _ => None,
        }
    }

    /// Text used for the `Detected Type:` report line
    pub fn label(&self) -> &str {
        match self {
            Detection::Empty => "Empty",
            Detection::Matched(id) => id,
            Detection::NoMatch => "Unknown",
            Detection::Faulted(_) => "Corrupted",
        }
    }
}

/// Final classification of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Mismatch,
    Corrupted,
    Unknown,
    Empty,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Ok,
        Status::Mismatch,
        Status::Corrupted,
        Status::Unknown,
        Status::Empty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Mismatch => "Mismatch",
            Status::Corrupted => "Corrupted",
            Status::Unknown => "Unknown",
            Status::Empty => "Empty",
        }
    }

    /// Name of the bucket folder a file with this status is moved to
    pub fn bucket(&self) -> Option<&'static str> {
        match self {
            Status::Ok | Status::Mismatch | Status::Corrupted => Some(self.as_str()),
            Status::Unknown | Status::Empty => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A processed file
#[derive(Debug, Clone)]
pub struct FileRecord {
    path: PathBuf,
    declared_extension: String,
    size: u64,
    detection: Detection,
    status: Status,
    destination: Option<PathBuf>,
}

impl FileRecord {
    pub fn new(path: PathBuf, size: u64, detection: Detection, status: Status) -> Self {
        let declared_extension = declared_extension(&path);
        Self {
            path,
            declared_extension,
            size,
            detection,
            status,
            destination: None,
        }
    }

    /// Records where the file was moved to
    pub fn with_destination(mut self, destination: PathBuf) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Original location of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Extension in uppercase, without the leading dot
    pub fn declared_extension(&self) -> &str {
        &self.declared_extension
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn detection(&self) -> &Detection {
        &self.detection
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }
}

/// Uppercase extension of `path` with no leading dot; empty when absent
pub fn declared_extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
