use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Initialize logging once for all tests
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Generate test file content of a specific size
#[allow(dead_code)]
pub fn generate_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Create a secret file of `size` bytes inside `dir`
#[allow(dead_code)]
pub fn create_secret_file(dir: &Path, name: &str, size: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, generate_test_content(size)).unwrap();
    path
}

/// Create a store layout: nested empty directories under a fresh temp dir
#[allow(dead_code)]
pub fn create_empty_store_tree() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let deepest = temp_dir.path().join("foo").join("bar").join("baz").join("zab");
    std::fs::create_dir_all(&deepest).unwrap();
    (temp_dir, deepest)
}

/// Make `path` read-only and report whether this process is actually
/// prevented from opening it for writing (privileged users are not).
#[allow(dead_code)]
pub fn make_unwritable(path: &Path) -> bool {
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(path, perms).unwrap();

    std::fs::OpenOptions::new().write(true).open(path).is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_content() {
        let content = generate_test_content(100);
        assert_eq!(content.len(), 100);
        assert_eq!(content[0], 0);
        assert_eq!(content[99], 99);
    }
}
