use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by filesystem operations
#[derive(Error, Debug)]
pub enum FsError {
    /// Shredding needs at least one overwrite pass
    #[error("Shred pass count must be at least 1 (got {0})")]
    InvalidPasses(u32),

    /// Target could not be opened for writing
    #[error("Failed to open {path} for writing: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Target size could not be read
    #[error("Failed to read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seek or write failed during an overwrite pass
    #[error("Overwrite pass {pass} of {path} failed: {source}")]
    Overwrite {
        path: PathBuf,
        pass: u32,
        source: std::io::Error,
    },

    /// The operating system random source failed
    #[error("Random source failed during pass {pass} of {path}: {message}")]
    Random {
        path: PathBuf,
        pass: u32,
        message: String,
    },

    /// Written data could not be flushed to the device
    #[error("Failed to sync pass {pass} of {path}: {source}")]
    Sync {
        path: PathBuf,
        pass: u32,
        source: std::io::Error,
    },

    /// Content was destroyed but the directory entry remains
    #[error("Overwrote {path} but failed to remove it: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Shredding did not finish before the deadline
    #[error("Shredding {path} timed out after {timeout_ms}ms")]
    Timeout { path: PathBuf, timeout_ms: u64 },

    /// Blocking task panicked or was cancelled
    #[error("Shred task failed: {0}")]
    Task(String),

    /// Directory traversal failed
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path exists but is not a regular file
    #[error("Not a regular file: {0}")]
    NotRegularFile(PathBuf),

    /// Existing copy destination could not be removed
    #[error("Failed to replace existing destination {path}: {source}")]
    ReplaceDestination {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Copy failed
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for filesystem operations
pub type FsResult<T> = Result<T, FsError>;

impl FsError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }

    pub fn overwrite(path: impl Into<PathBuf>, pass: u32, source: std::io::Error) -> Self {
        Self::Overwrite {
            path: path.into(),
            pass,
            source,
        }
    }

    pub fn walk(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// True when only the final unlink failed; the content is already gone.
    pub fn is_cleanup_only(&self) -> bool {
        matches!(self, Self::Remove { .. })
    }

    /// True when a shred failed before removal was attempted, so the target
    /// is still on disk (possibly partially overwritten).
    pub fn file_intact(&self) -> bool {
        matches!(
            self,
            Self::InvalidPasses(_)
                | Self::Open { .. }
                | Self::Metadata { .. }
                | Self::Overwrite { .. }
                | Self::Random { .. }
                | Self::Sync { .. }
                | Self::NotRegularFile(_)
        )
    }

    /// Underlying I/O error kind, if any
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Open { source, .. }
            | Self::Metadata { source, .. }
            | Self::Overwrite { source, .. }
            | Self::Sync { source, .. }
            | Self::Remove { source, .. }
            | Self::Walk { source, .. }
            | Self::Read { source, .. }
            | Self::ReplaceDestination { source, .. }
            | Self::Copy { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = FsError::InvalidPasses(0);
        assert_eq!(err.to_string(), "Shred pass count must be at least 1 (got 0)");

        let err = FsError::overwrite(
            "/tmp/secret.gpg",
            2,
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(
            err.to_string(),
            "Overwrite pass 2 of /tmp/secret.gpg failed: disk full"
        );

        let err = FsError::NotRegularFile(PathBuf::from("/tmp"));
        assert_eq!(err.to_string(), "Not a regular file: /tmp");
    }

    #[test]
    fn test_removal_is_cleanup_only() {
        let err = FsError::Remove {
            path: PathBuf::from("a"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.is_cleanup_only());
        assert!(!err.file_intact());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_overwrite_failure_keeps_file() {
        let err = FsError::open("a", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(err.file_intact());
        assert!(!err.is_cleanup_only());

        let err = FsError::Timeout {
            path: PathBuf::from("a"),
            timeout_ms: 10,
        };
        assert!(!err.file_intact());
        assert_eq!(err.io_kind(), None);
    }

    #[test]
    fn test_replacing_destination_is_not_cleanup() {
        let err = FsError::ReplaceDestination {
            path: PathBuf::from("/tmp/ro/to"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(!err.is_cleanup_only());
        assert!(!err.file_intact());
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(
            err.to_string(),
            "Failed to replace existing destination /tmp/ro/to: permission denied"
        );
    }
}
