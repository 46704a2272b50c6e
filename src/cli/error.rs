use crate::error::FsError;

// Exit codes for CLI automation
pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = 1;
/// Also used when a predicate answers "no"
pub const NOT_FOUND: i32 = 2;
pub const INVALID_INPUT: i32 = 3;

/// Map a library error to an exit code
pub fn exit_code_for(err: &FsError) -> i32 {
    match err {
        FsError::InvalidPasses(_) | FsError::NotRegularFile(_) => INVALID_INPUT,
        _ if err.io_kind() == Some(std::io::ErrorKind::NotFound) => NOT_FOUND,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&FsError::InvalidPasses(0)), INVALID_INPUT);
        assert_eq!(
            exit_code_for(&FsError::open("x", io::Error::from(io::ErrorKind::NotFound))),
            NOT_FOUND
        );
        assert_eq!(
            exit_code_for(&FsError::open("x", io::Error::from(io::ErrorKind::PermissionDenied))),
            ERROR
        );
        assert_eq!(exit_code_for(&FsError::NotRegularFile(PathBuf::from("x"))), INVALID_INPUT);
    }
}
