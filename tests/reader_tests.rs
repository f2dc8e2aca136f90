//! Tests for reading source lists

use listcopy::{read_list, ListCopyError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_source(dir: &Path, lines: &[String]) -> PathBuf {
    let source = dir.join("paths.txt");
    fs::write(&source, lines.join("\n")).expect("write source list");
    source
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_read_list_scenario() {
    let temp = TempDir::new().expect("create tempdir");
    let a = temp.path().join("a.txt");
    let subdir = temp.path().join("subdir");
    fs::write(&a, b"a").expect("write a.txt");
    fs::create_dir(&subdir).expect("create subdir");

    let source = write_source(
        temp.path(),
        &[
            display(&a),
            String::new(),
            display(&temp.path().join("missing.txt")),
            display(&subdir),
        ],
    );

    let list = read_list(&source).expect("read list");

    assert_eq!(list.as_slice(), &[display(&a), display(&subdir)]);
}

#[test]
fn test_read_list_keeps_k_of_n_in_order() {
    let temp = TempDir::new().expect("create tempdir");
    let mut lines = Vec::new();
    let mut expected = Vec::new();

    for i in 0..10 {
        let path = temp.path().join(format!("file{i}.dat"));
        if i % 3 == 0 {
            fs::write(&path, b"x").expect("write file");
            expected.push(display(&path));
        }
        lines.push(display(&path));
        if i % 4 == 0 {
            lines.push(String::new());
        }
    }

    let list = read_list(&write_source(temp.path(), &lines)).expect("read list");

    assert_eq!(list.len(), expected.len());
    assert_eq!(list.as_slice(), expected.as_slice());
}

#[test]
fn test_read_list_keeps_duplicates() {
    let temp = TempDir::new().expect("create tempdir");
    let a = temp.path().join("a.txt");
    fs::write(&a, b"a").expect("write a.txt");

    let source = write_source(temp.path(), &[display(&a), display(&a)]);
    let list = read_list(&source).expect("read list");

    assert_eq!(list.len(), 2);
}

#[test]
fn test_read_list_with_no_valid_lines_is_empty() {
    let temp = TempDir::new().expect("create tempdir");
    let source = write_source(
        temp.path(),
        &["/definitely/not/here".to_string(), String::new()],
    );

    let list = read_list(&source).expect("empty list is not an error");
    assert!(list.is_empty());
}

#[test]
fn test_read_list_missing_source_is_fatal() {
    let temp = TempDir::new().expect("create tempdir");
    let err = read_list(&temp.path().join("no-such-list.txt")).expect_err("missing source");

    assert!(matches!(err, ListCopyError::SourceNotFound { .. }));
    assert!(err.is_fatal());
}
