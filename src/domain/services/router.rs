//! File router service
//!
//! Maps a status to a bucket folder under the checked directory and asks a
//! [`FileMover`] to put the file there.

use crate::core::error::RouteError;
use crate::domain::entities::Status;
use crate::domain::repositories::FileMover;
use std::path::{Path, PathBuf};

/// Routing policy for one checked directory
#[derive(Debug, Clone)]
pub struct FileRouter {
    root: PathBuf,
}

impl FileRouter {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Bucket folders that routed files can land in
    pub fn buckets(&self) -> Vec<PathBuf> {
        Status::ALL
            .iter()
            .filter_map(|s| s.bucket())
            .map(|name| self.root.join(name))
            .collect()
    }

    /// Where a file with `status` belongs; `None` means it stays in place
    pub fn destination(&self, file: &Path, status: Status) -> Option<PathBuf> {
        let bucket = status.bucket()?;
        let name = file.file_name()?;
        Some(self.root.join(bucket).join(name))
    }

    /// Creates every bucket folder; existing folders are fine
    pub fn prepare<M: FileMover>(&self, mover: &M) -> Result<(), RouteError> {
        for bucket in self.buckets() {
            mover.ensure_dir(&bucket)?;
        }
        Ok(())
    }

    /// Moves `file` into its bucket and returns the new path
    pub fn route<M: FileMover>(
        &self,
        mover: &M,
        file: &Path,
        status: Status,
    ) -> Result<Option<PathBuf>, RouteError> {
        let Some(destination) = self.destination(file, status) else {
            return Ok(None);
        };
        mover.move_file(file, &destination)?;
        tracing::debug!("Moved {} to {}", file.display(), destination.display());
        Ok(Some(destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingMover {
        dirs: RefCell<Vec<PathBuf>>,
        moves: RefCell<Vec<(PathBuf, PathBuf)>>,
    }

    impl FileMover for RecordingMover {
        fn ensure_dir(&self, dir: &Path) -> Result<(), RouteError> {
            self.dirs.borrow_mut().push(dir.to_path_buf());
            Ok(())
        }

        fn move_file(&self, from: &Path, to: &Path) -> Result<(), RouteError> {
            self.moves
                .borrow_mut()
                .push((from.to_path_buf(), to.to_path_buf()));
            Ok(())
        }
    }

    #[test]
    fn destinations_follow_status() {
        let router = FileRouter::new(Path::new("/data"));
        let file = Path::new("/data/a.png");
        assert_eq!(
            router.destination(file, Status::Ok),
            Some(PathBuf::from("/data/OK/a.png"))
        );
        assert_eq!(
            router.destination(file, Status::Mismatch),
            Some(PathBuf::from("/data/Mismatch/a.png"))
        );
        assert_eq!(
            router.destination(file, Status::Corrupted),
            Some(PathBuf::from("/data/Corrupted/a.png"))
        );
        assert_eq!(router.destination(file, Status::Unknown), None);
        assert_eq!(router.destination(file, Status::Empty), None);
    }

    #[test]
    fn unrouted_status_never_moves() {
        let router = FileRouter::new(Path::new("/data"));
        let mover = RecordingMover::default();
        let moved = router
            .route(&mover, Path::new("/data/x.bin"), Status::Unknown)
            .unwrap();
        assert_eq!(moved, None);
        assert!(mover.moves.borrow().is_empty());
    }

    #[test]
    fn prepare_creates_three_buckets() {
        let router = FileRouter::new(Path::new("/data"));
        let mover = RecordingMover::default();
        router.prepare(&mover).unwrap();
        assert_eq!(mover.dirs.borrow().len(), 3);
    }
}
