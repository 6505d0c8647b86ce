// ============================================================================
// File: src/storage/fs_ops.rs
// ----------------------------------------------------------------------------
// Directory and marker file creation primitives.
//
// Each primitive classifies its outcome explicitly so callers can decide on
// fallback without inspecting io errors. A directory that already exists,
// including one created concurrently by another caller, is a success.
// ============================================================================

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

/// Outcome of a successful directory ensure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// Directory existed before the call
    AlreadyPresent,
    /// Directory was created by this call
    Created,
}

/// Ensure a directory exists, creating missing parents
pub fn ensure_dir_all(path: &Path) -> StorageResult<DirStatus> {
    if path.is_dir() {
        return Ok(DirStatus::AlreadyPresent);
    }

    match fs::create_dir_all(path) {
        Ok(()) => Ok(DirStatus::Created),
        Err(e) => classify_create_error(path, e),
    }
}

/// Ensure a directory exists, creating only the last path component
pub fn ensure_dir(path: &Path) -> StorageResult<DirStatus> {
    if path.is_dir() {
        return Ok(DirStatus::AlreadyPresent);
    }

    match fs::create_dir(path) {
        Ok(()) => Ok(DirStatus::Created),
        Err(e) => classify_create_error(path, e),
    }
}

fn classify_create_error(path: &Path, error: io::Error) -> StorageResult<DirStatus> {
    // lost a creation race
    if error.kind() == io::ErrorKind::AlreadyExists && path.is_dir() {
        return Ok(DirStatus::AlreadyPresent);
    }

    Err(StorageError::DirectoryCreateFailed {
        path: path.to_path_buf(),
        source: error,
    })
}

/// Create a zero-length marker file inside `dir`
///
/// An existing marker is left untouched and counts as success.
pub fn create_marker(dir: &Path, name: &str) -> StorageResult<PathBuf> {
    let marker = dir.join(name);

    match OpenOptions::new().write(true).create_new(true).open(&marker) {
        Ok(_) => Ok(marker),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(marker),
        Err(source) => Err(StorageError::MarkerCreateFailed {
            path: marker,
            source,
        }),
    }
}
