//! File system utilities for staging.
//!
//! Synchronous on purpose: staging completes before the backend is awaited,
//! so nothing here runs on the async runtime's critical path.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    fs,
    io::{self},
    path::Path,
};

/// Creates the given directory path, erasing it first if specified.
pub fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path)?;
    }
    fs::create_dir_all(path).fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

fn missing_source(from: &Path) -> Error {
    Error::Fs {
        context: "copying missing source",
        path: from.to_path_buf(),
        error: io::Error::new(io::ErrorKind::NotFound, "source does not exist"),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites an existing destination. Fails if the source path is a
/// directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(missing_source(from));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).fs_context("copying file to", to)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Preserves symlinks on platforms that support them. An existing
/// destination is removed first, so repeated copies leave the same tree.
pub fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(missing_source(from));
    }
    if !from.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a Directory")));
    }

    remove_dir_all(to)?;
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }

    for entry in walkdir::WalkDir::new(from) {
        let entry = entry?;
        debug_assert!(entry.path().starts_with(from));
        let rel_path = entry.path().strip_prefix(from)?;
        let dest_path = to.join(rel_path);

        if entry.file_type().is_symlink() {
            let target = fs::read_link(entry.path()).fs_context("reading link", entry.path())?;
            if entry.path().is_dir() {
                symlink_dir(&target, &dest_path).fs_context("creating link", &dest_path)?;
            } else {
                symlink_file(&target, &dest_path).fs_context("creating link", &dest_path)?;
            }
        } else if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
        } else {
            fs::copy(entry.path(), &dest_path).fs_context("copying file to", &dest_path)?;
        }
    }

    Ok(())
}

/// Copies a file or a directory tree.
pub fn copy_path(from: &Path, to: &Path) -> Result<()> {
    if from.is_dir() {
        copy_dir(from, to)
    } else {
        copy_file(from, to)
    }
}

/// Writes `contents` to `path`, replacing any existing file and creating
/// parent directories.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }
    fs::write(path, contents).fs_context("writing", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::ErrorKind;

    #[test]
    fn recreates_directory_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("dist");
        fs::create_dir_all(dir.join("old")).unwrap();
        fs::write(dir.join("old/stale.dmg"), b"stale").unwrap();

        create_dir_all(&dir, true).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn removing_absent_directory_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        remove_dir_all(&tmp.path().join("nope")).unwrap();
    }

    #[test]
    fn copy_file_creates_parents_and_keeps_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("app.png");
        let bytes = [0x89, b'P', b'N', b'G', 0, 1, 2, 255];
        fs::write(&src, bytes).unwrap();

        let dst = tmp.path().join("build/assets/app.png");
        copy_file(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), bytes);
    }

    #[test]
    fn copy_file_missing_source_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_file(&tmp.path().join("missing.png"), &tmp.path().join("out.png"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn copy_dir_replaces_previous_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("icons");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("nested/a.png"), b"a").unwrap();

        let dst = tmp.path().join("build/icons");
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("leftover.png"), b"x").unwrap();

        copy_dir(&src, &dst).unwrap();
        copy_dir(&src, &dst).unwrap();

        assert_eq!(fs::read(dst.join("nested/a.png")).unwrap(), b"a");
        assert!(!dst.join("leftover.png").exists());
    }
}
