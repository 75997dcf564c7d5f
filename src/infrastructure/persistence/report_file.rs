//! Plain-text check report
//!
//! One block per file:
//!
//! ```text
//! File: /data/photo.png
//! Detected Type: PNG
//! Extension: PNG
//! Status: OK
//!
//! ```

use crate::domain::entities::FileRecord;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Renders the report text for `records`, in the given order
pub fn render_report(records: &[FileRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "File: {}", record.path().display());
        let _ = writeln!(out, "Detected Type: {}", record.detection().label());
        let _ = writeln!(out, "Extension: {}", record.declared_extension());
        let _ = writeln!(out, "Status: {}", record.status());
        out.push('\n');
    }
    out
}

/// Writes the report to `path`, creating its parent folder if needed
pub fn write_report(path: &Path, records: &[FileRecord]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_report(records).as_bytes())?;
    writer.flush()
}
