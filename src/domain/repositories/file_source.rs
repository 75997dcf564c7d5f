//! File source trait
//!
//! Defines how the checker enumerates a directory and opens its files.

use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

/// Trait for reading the files of a directory
pub trait FileSource: Send {
    /// Stream handed to the format detector
    type Reader: Read + Seek;

    /// Lists the regular files directly inside `dir` (no recursion)
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Returns the size of `path` in bytes
    fn size(&self, path: &Path) -> io::Result<u64>;

    /// Opens `path` for header probing
    fn open(&self, path: &Path) -> io::Result<Self::Reader>;
}
