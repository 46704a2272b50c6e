use crate::error::{FsError, FsResult};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Like [`is_dir`] but surfaces errors other than "not found"
pub fn try_is_dir(path: impl AsRef<Path>) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Like [`is_file`] but surfaces errors other than "not found"
pub fn try_is_file(path: impl AsRef<Path>) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// True if `path` is a directory. Every error counts as `false`.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    try_is_dir(path).unwrap_or_else(|e| {
        tracing::trace!("Cannot stat {:?}: {}", path, e);
        false
    })
}

/// True if `path` is a regular file. Every error counts as `false`.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    try_is_file(path).unwrap_or_else(|e| {
        tracing::trace!("Cannot stat {:?}: {}", path, e);
        false
    })
}

/// True if `path` is a regular file with at least one byte
pub fn is_non_empty_file(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.len() > 0)
        .unwrap_or(false)
}

/// Check whether the tree below `path` contains no regular files.
///
/// Nested empty directories do not count as content. Symlinks are not
/// followed and are not counted. Stops at the first regular file found.
pub fn is_empty_dir(path: impl AsRef<Path>) -> FsResult<bool> {
    let path = path.as_ref();
    let found = find_regular_file(path)?;
    tracing::debug!("{:?} is {}", path, if found { "not empty" } else { "empty" });
    Ok(!found)
}

fn find_regular_file(dir: &Path) -> FsResult<bool> {
    let entries = std::fs::read_dir(dir).map_err(|e| FsError::walk(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| FsError::walk(dir, e))?;
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| FsError::walk(&entry_path, e))?;

        if file_type.is_file() {
            tracing::trace!("Found regular file {:?}", entry_path);
            return Ok(true);
        }
        if file_type.is_dir() && find_regular_file(&entry_path)? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// True if any line of the file at `path` contains `needle`
pub fn file_contains(path: impl AsRef<Path>, needle: &str) -> FsResult<bool> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| FsError::read(path, e))?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| FsError::read(path, e))?;
        if line.contains(needle) {
            return Ok(true);
        }
    }

    Ok(false)
}
