mod common;

use common::*;
use fsutil::file::{is_file, shred, Shredder};
use fsutil::FsError;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_shred_success_removes_file() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let path = create_secret_file(temp_dir.path(), "file", 10 * 1024 * 1024);

    shred(&path, 8).unwrap();
    assert!(!is_file(&path));
}

#[test]
fn test_shred_unwritable_file_is_kept() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let path = create_secret_file(temp_dir.path(), "file", 10 * 1024);

    if !make_unwritable(&path) {
        // Privileged users can write read-only files; nothing to assert
        return;
    }

    let err = shred(&path, 8).unwrap_err();
    assert!(matches!(err, FsError::Open { .. }));
    assert!(err.file_intact());
    assert!(is_file(&path));
    assert_eq!(std::fs::read(&path).unwrap(), generate_test_content(10 * 1024));
}

#[test]
fn test_shred_directory_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("store");
    std::fs::create_dir(&dir).unwrap();

    assert!(shred(&dir, 3).is_err());
    assert!(dir.is_dir());
}

#[test]
fn test_shred_zero_passes_leaves_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_secret_file(temp_dir.path(), "file", 4096);

    assert!(matches!(shred(&path, 0), Err(FsError::InvalidPasses(0))));
    assert_eq!(std::fs::read(&path).unwrap(), generate_test_content(4096));
}

#[test]
fn test_shred_odd_chunk_size() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_secret_file(temp_dir.path(), "file", 10_001);

    Shredder::new(2).chunk_size(333).sync_each_pass(false).shred(&path).unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn test_shred_with_timeout_completes() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_secret_file(temp_dir.path(), "file", 64 * 1024);

    Shredder::new(3)
        .shred_with_timeout(path.clone(), Duration::from_secs(30))
        .await
        .unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn test_shred_with_timeout_propagates_errors() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let err = Shredder::new(1)
        .shred_with_timeout(missing, Duration::from_secs(30))
        .await
        .unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
}

#[tokio::test]
async fn test_shred_with_timeout_expires() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_secret_file(temp_dir.path(), "file", 1024 * 1024);

    let err = Shredder::new(20)
        .shred_with_timeout(path, Duration::from_millis(1))
        .await
        .unwrap_err();

    match err {
        FsError::Timeout { timeout_ms, .. } => assert_eq!(timeout_ms, 1),
        other => panic!("Expected Timeout, got {:?}", other),
    }
}
