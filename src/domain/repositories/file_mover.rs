//! File mover trait
//!
//! Defines the interface for placing checked files into bucket folders.

use crate::core::error::RouteError;
use std::path::Path;

/// Trait for moving files on storage
///
/// Implementations must never overwrite: a move onto an existing path
/// fails with [`RouteError::DestinationExists`].
///
/// # Example
///
/// ```ignore
/// let mover = LocalFileMover;
/// mover.ensure_dir(Path::new("/data/OK"))?;
/// mover.move_file(Path::new("/data/a.png"), Path::new("/data/OK/a.png"))?;
/// ```
pub trait FileMover: Send {
    /// Creates `dir` if it does not exist yet
    fn ensure_dir(&self, dir: &Path) -> Result<(), RouteError>;

    /// Moves `from` to `to`
    fn move_file(&self, from: &Path, to: &Path) -> Result<(), RouteError>;
}
