use crate::error::{FsError, FsResult};
use std::io;
use std::path::Path;

/// Copy the regular file `from` to `to`, replacing `to`'s contents.
///
/// `to`, if it exists, must be a regular file. Copying a file onto itself is
/// a no-op. Permissions are copied along with the contents.
pub fn copy_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> FsResult<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    let from_meta = std::fs::metadata(from).map_err(|e| FsError::read(from, e))?;
    if !from_meta.is_file() {
        return Err(FsError::NotRegularFile(from.to_path_buf()));
    }

    if let Ok(to_meta) = std::fs::metadata(to) {
        if !to_meta.is_file() {
            return Err(FsError::NotRegularFile(to.to_path_buf()));
        }
        if is_same_file(from, to) {
            tracing::debug!("{:?} and {:?} are the same file, skipping copy", from, to);
            return Ok(());
        }
    }

    let bytes = std::fs::copy(from, to).map_err(|e| FsError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Copied {} bytes from {:?} to {:?}", bytes, from, to);
    Ok(())
}

/// Like [`copy_file`], but removes an existing destination file first so a
/// read-only destination does not block the copy.
pub fn copy_file_force(from: impl AsRef<Path>, to: impl AsRef<Path>) -> FsResult<()> {
    let to = to.as_ref();
    remove_existing(to, |path| std::fs::remove_file(path))?;
    copy_file(from, to)
}

/// Remove `to` with `remove` if it is a regular file. Nothing has been copied
/// yet, so a failure here is a failed copy, not a partial shred.
fn remove_existing(to: &Path, remove: impl FnOnce(&Path) -> io::Result<()>) -> FsResult<()> {
    if super::predicates::is_file(to) {
        remove(to).map_err(|e| FsError::ReplaceDestination {
            path: to.to_path_buf(),
            source: e,
        })?;
        tracing::trace!("Removed existing destination {:?}", to);
    }
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
