//! Infrastructure layer tests
//!
//! Tests for the local directory source, the file mover and the report.

use hdrcheck::core::error::RouteError;
use hdrcheck::domain::entities::{Detection, FileRecord, Status};
use hdrcheck::domain::repositories::{FileMover, FileSource};
use hdrcheck::infrastructure::file_systems::LocalDirectory;
use hdrcheck::infrastructure::persistence::{LocalFileMover, render_report, write_report};
use rstest::*;
use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// Local Directory Tests
// ============================================================================

#[rstest]
fn test_lists_only_regular_files(temp_dir: TempDir) {
    fs::write(temp_dir.path().join("a.png"), b"a").unwrap();
    fs::write(temp_dir.path().join("b.txt"), b"b").unwrap();
    fs::create_dir(temp_dir.path().join("OK")).unwrap();
    fs::write(temp_dir.path().join("OK").join("nested.png"), b"c").unwrap();

    let mut files = LocalDirectory.list_files(temp_dir.path()).unwrap();
    files.sort();

    assert_eq!(
        files,
        vec![temp_dir.path().join("a.png"), temp_dir.path().join("b.txt")]
    );
}

#[rstest]
fn test_size_and_open(temp_dir: TempDir) {
    let path = temp_dir.path().join("data.bin");
    fs::write(&path, b"0123456789").unwrap();

    assert_eq!(LocalDirectory.size(&path).unwrap(), 10);

    let mut reader = LocalDirectory.open(&path).unwrap();
    reader.seek(SeekFrom::Start(4)).unwrap();
    let mut buf = [0u8; 3];
    reader.read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"456");
}

#[cfg(unix)]
#[rstest]
fn test_lists_symlinks_to_regular_files(temp_dir: TempDir) {
    use std::os::unix::fs::symlink;

    let target = temp_dir.path().join("OK");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("real.png"), b"png").unwrap();
    symlink(target.join("real.png"), temp_dir.path().join("link.png")).unwrap();
    symlink(&target, temp_dir.path().join("dir_link")).unwrap();
    symlink(temp_dir.path().join("gone"), temp_dir.path().join("dangling.png")).unwrap();

    let files = LocalDirectory.list_files(temp_dir.path()).unwrap();

    assert_eq!(files, vec![temp_dir.path().join("link.png")]);
    assert_eq!(LocalDirectory.size(&files[0]).unwrap(), 3);
}

#[rstest]
fn test_missing_directory_errors(temp_dir: TempDir) {
    assert!(LocalDirectory.list_files(&temp_dir.path().join("nope")).is_err());
}

// ============================================================================
// Local File Mover Tests
// ============================================================================

#[rstest]
fn test_move_into_new_bucket(temp_dir: TempDir) {
    let from = temp_dir.path().join("photo.png");
    fs::write(&from, b"png").unwrap();
    let bucket = temp_dir.path().join("OK");
    let to = bucket.join("photo.png");

    LocalFileMover.ensure_dir(&bucket).unwrap();
    LocalFileMover.move_file(&from, &to).unwrap();

    assert!(!from.exists());
    assert_eq!(fs::read(&to).unwrap(), b"png");
}

#[rstest]
fn test_move_refuses_to_overwrite(temp_dir: TempDir) {
    let from = temp_dir.path().join("photo.png");
    fs::write(&from, b"new").unwrap();
    let bucket = temp_dir.path().join("OK");
    fs::create_dir(&bucket).unwrap();
    let to = bucket.join("photo.png");
    fs::write(&to, b"old").unwrap();

    let result = LocalFileMover.move_file(&from, &to);

    assert!(matches!(result, Err(RouteError::DestinationExists(p)) if p == to));
    assert_eq!(fs::read(&from).unwrap(), b"new");
    assert_eq!(fs::read(&to).unwrap(), b"old");
}

#[rstest]
fn test_move_missing_source_fails(temp_dir: TempDir) {
    let result = LocalFileMover.move_file(
        &temp_dir.path().join("gone.png"),
        &temp_dir.path().join("dest.png"),
    );
    assert!(matches!(result, Err(RouteError::Move { .. })));
}

#[rstest]
fn test_bucket_over_existing_file_fails(temp_dir: TempDir) {
    let blocker = temp_dir.path().join("OK");
    fs::write(&blocker, b"not a directory").unwrap();

    let result = LocalFileMover.ensure_dir(&blocker);
    assert!(matches!(result, Err(RouteError::CreateBucket { .. })));
}

// ============================================================================
// Report Tests
// ============================================================================

fn record(path: &str, detection: Detection, status: Status) -> FileRecord {
    FileRecord::new(PathBuf::from(path), 1, detection, status)
}

#[rstest]
fn test_render_report_blocks() {
    let records = vec![
        record("/in/photo.png", Detection::Matched("PNG".into()), Status::Ok),
        record("/in/fake.jpg", Detection::Matched("PNG".into()), Status::Mismatch),
        record("/in/readme", Detection::NoMatch, Status::Unknown),
        record("/in/bad.gif", Detection::Faulted("I/O error".into()), Status::Corrupted),
    ];

    let text = render_report(&records);

    assert_eq!(
        text,
        "File: /in/photo.png\nDetected Type: PNG\nExtension: PNG\nStatus: OK\n\n\
         File: /in/fake.jpg\nDetected Type: PNG\nExtension: JPG\nStatus: Mismatch\n\n\
         File: /in/readme\nDetected Type: Unknown\nExtension: \nStatus: Unknown\n\n\
         File: /in/bad.gif\nDetected Type: Corrupted\nExtension: GIF\nStatus: Corrupted\n\n"
    );
}

#[rstest]
fn test_render_empty_report() {
    assert_eq!(render_report(&[]), "");
}

#[rstest]
fn test_write_report_creates_parent_and_replaces(temp_dir: TempDir) {
    let path = temp_dir.path().join("logs").join("check_results.txt");

    write_report(
        &path,
        &[record("/in/a.png", Detection::Matched("PNG".into()), Status::Ok)],
    )
    .unwrap();
    write_report(&path, &[record("/in/b.dat", Detection::Empty, Status::Empty)]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("a.png"));
    assert!(text.contains("File: /in/b.dat\nDetected Type: Empty\nExtension: DAT\nStatus: Empty\n"));
}
