//! Local file mover implementation
//!
//! Moves checked files into bucket folders on the local filesystem.

use crate::core::error::RouteError;
use crate::domain::repositories::FileMover;
use std::fs;
use std::path::Path;

/// Local file system mover
///
/// Uses `fs::rename`, which is atomic when source and destination share a
/// filesystem (always the case for buckets inside the checked directory).
/// An existing destination is never overwritten by this process: the
/// destination is checked right before the rename. The check and the rename
/// are two steps, so a file created at the destination by another process
/// in between is replaced; the checked directory is assumed not to be
/// written to concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileMover;

impl FileMover for LocalFileMover {
    fn ensure_dir(&self, dir: &Path) -> Result<(), RouteError> {
        if dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|source| RouteError::CreateBucket {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn move_file(&self, from: &Path, to: &Path) -> Result<(), RouteError> {
        // rename() replaces existing files on Unix, so check first
        let exists = to.try_exists().map_err(|source| RouteError::Move {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;
        if exists {
            return Err(RouteError::DestinationExists(to.to_path_buf()));
        }

        fs::rename(from, to).map_err(|source| RouteError::Move {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }
}
