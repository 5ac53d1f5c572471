//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use switchhosts_make::bundler::utils::fs::copy_dir;
use tempfile::TempDir;

/// Copies `tests/fixtures/project` into a fresh temporary directory.
pub fn fixture_project() -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path().join("project");
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project");
    copy_dir(&fixture, &root).expect("copy fixture project");
    (tmp, root)
}

/// Every file under `dir`, relative and sorted, with its bytes.
pub fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files: Vec<_> = walkdir::WalkDir::new(dir)
        .into_iter()
        .map(|entry| entry.expect("walk dir"))
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry.path().strip_prefix(dir).unwrap().to_path_buf();
            let bytes = std::fs::read(entry.path()).unwrap();
            (rel, bytes)
        })
        .collect();
    files.sort();
    files
}
