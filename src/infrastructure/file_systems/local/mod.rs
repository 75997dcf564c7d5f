//! Local directory source
//!
//! Reads a directory of the local filesystem for header checking.

use crate::domain::repositories::FileSource;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// [`FileSource`] backed by `std::fs`
///
/// Only regular files directly inside the directory are listed. A symlink
/// counts when it resolves to a regular file; the link itself is what gets
/// moved. Folders, special files and dangling links are skipped.
///
/// # Example
///
/// ```ignore
/// let source = LocalDirectory;
/// for path in source.list_files(Path::new("/data"))? {
///     println!("{} ({} bytes)", path.display(), source.size(&path)?);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectory;

impl FileSource for LocalDirectory {
    type Reader = File;

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let regular = if file_type.is_symlink() {
                // Dangling links have no metadata and are skipped
                fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
            } else {
                file_type.is_file()
            };
            if regular {
                files.push(entry.path());
            }
        }
        Ok(files)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }
}
