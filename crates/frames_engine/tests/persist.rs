use std::fs;

use frames_engine::{ensure_output_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("oval");
    assert!(!new_dir.exists());
    assert!(ensure_output_dir(&new_dir).unwrap());
    assert!(new_dir.is_dir());
    assert!(!ensure_output_dir(&new_dir).unwrap());
}

#[test]
fn atomic_write_never_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write_new("aviator-gold3.jpg", b"first").unwrap();
    assert_eq!(first.file_name().unwrap(), "aviator-gold3.jpg");
    assert_eq!(fs::read(&first).unwrap(), b"first");

    let err = writer.write_new("aviator-gold3.jpg", b"second").unwrap_err();
    assert!(matches!(err, PersistError::AlreadyExists(path) if path == first));
    assert_eq!(fs::read(&first).unwrap(), b"first");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write_new("frame.jpg", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("frame.jpg").exists());
}
