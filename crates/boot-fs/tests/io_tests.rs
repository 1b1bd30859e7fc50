use boot_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_parent_and_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("logs/venv_creation.log"));

    io::write_atomic(&path, b"created venv").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "created venv");
}

#[test]
fn test_write_text_overwrites_previous_transcript() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("venv_creation.log");
    fs::write(&file_path, "attempt one\nfailed\n").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_text(&path, "attempt two\n").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "attempt two\n");
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("stamp"));

    io::write_atomic(&path, b"sha256:abc").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/bootstrap.toml");
    assert!(io::read_text(&path).is_err());
}

#[test]
fn test_remove_dir_if_exists_removes_tree() {
    let temp = TempDir::new().unwrap();
    let venv = temp.path().join(".venv");
    fs::create_dir_all(venv.join("lib/python3.12/site-packages")).unwrap();
    fs::write(venv.join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();

    let removed = io::remove_dir_if_exists(&NormalizedPath::new(&venv)).unwrap();

    assert!(removed);
    assert!(!venv.exists());
}

#[test]
fn test_remove_dir_if_exists_absent_is_noop() {
    let temp = TempDir::new().unwrap();
    let venv = NormalizedPath::new(temp.path().join(".venv"));

    assert!(!io::remove_dir_if_exists(&venv).unwrap());
    assert!(!io::remove_dir_if_exists(&venv).unwrap());
}

#[test]
fn test_remove_dir_if_exists_removes_stray_file() {
    let temp = TempDir::new().unwrap();
    let venv = temp.path().join(".venv");
    fs::write(&venv, "not a directory").unwrap();

    assert!(io::remove_dir_if_exists(&NormalizedPath::new(&venv)).unwrap());
    assert!(!venv.exists());
}
